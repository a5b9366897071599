// Invitation prompt and the body used when the model gives nothing back.

/// Replace: {candidate_name}, {job_title}, {company}, {strengths},
///          {match_percentage}, {slots}
pub const INVITATION_PROMPT_TEMPLATE: &str = r#"Act as a professional recruiter. Write a personalized interview invitation email for {candidate_name}
who has been shortlisted for the {job_title} position at {company}.

Candidate's strengths: {strengths}
Match rate: {match_percentage}%

Include these proposed interview slots:
{slots}

The email should:
1. Be professional and warm
2. Congratulate them on being shortlisted
3. Briefly mention why they're a good fit, highlighting 1-2 strengths
4. Propose the interview slots and ask for their preference
5. Mention the interview will be conducted via video call (Zoom)
6. Explain next steps and whom to contact with questions

Respond with only the email text, no additional formatting or explanation."#;

/// Replace: {candidate_name}, {job_title}, {company}, {slot_lines}
pub const FALLBACK_INVITATION_TEMPLATE: &str = r#"Dear {candidate_name},

Congratulations! We are pleased to inform you that you have been shortlisted for the {job_title} position at {company}.

We were impressed with your profile and would like to invite you for a video interview to discuss your experience and the role in more detail.

Please let us know which of the following time slots would work best for you:
{slot_lines}

The interview will be conducted via Zoom, and we will send you the meeting details once you confirm your preferred time slot.

If you have any questions, please don't hesitate to contact us.

We look forward to speaking with you soon!

Best regards,
Recruiting Team
{company}"#;
