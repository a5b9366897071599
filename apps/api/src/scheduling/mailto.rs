use crate::scheduling::invitation::InterviewInvitation;

/// `mailto:` link with the recipient, subject and body percent-encoded.
///
/// The contact is free text ("email and/or phone") and may hold `?` or `&`.
pub fn mailto_link(invitation: &InterviewInvitation) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        urlencoding::encode(&invitation.candidate_contact),
        urlencoding::encode(&invitation.subject),
        urlencoding::encode(&invitation.body)
    )
}

/// Header block plus body, for pasting into any mail client.
pub fn plain_text(invitation: &InterviewInvitation) -> String {
    format!(
        "To: {}\nSubject: {}\n\n{}",
        invitation.candidate_contact, invitation.subject, invitation.body
    )
}
