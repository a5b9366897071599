// Prompt templates for job-description and resume extraction.
// Placeholders are replaced with `str::replace` before sending.

/// Job description summary prompt. Replace `{jd_text}`.
pub const JD_SUMMARY_PROMPT_TEMPLATE: &str = r#"Act as an expert job description analyzer. Review the following job description and extract
key elements in a structured format.

Job Description: {jd_text}

Respond with a valid JSON object containing these fields:
{
  "JobTitle": "title here",
  "Department": "department name",
  "Location": "location",
  "EmploymentType": "full-time/part-time/contract",
  "RequiredSkills": ["skill1", "skill2", "..."],
  "RequiredExperience": "X years in...",
  "RequiredQualifications": ["qualification1", "qualification2", "..."],
  "Responsibilities": ["responsibility1", "responsibility2", "..."],
  "SalaryRange": "range if mentioned",
  "PreferredSkills": ["skill1", "skill2", "..."]
}

Important: Only respond with the JSON object and nothing else. No explanations or markdown formatting."#;

/// Resume assessment prompt.
/// Replace: {job_title}, {required_skills}, {preferred_skills},
///          {required_experience}, {qualifications}, {responsibilities}, {cv_text}
pub const CV_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Act as a senior recruiting agent specializing in talent acquisition. Analyze this candidate's
resume against the job requirements and provide a detailed evaluation.

Job Title: {job_title}
Required Skills: {required_skills}
Preferred Skills: {preferred_skills}
Required Experience: {required_experience}
Required Qualifications: {qualifications}
Key Responsibilities: {responsibilities}

Candidate Resume: {cv_text}

Respond with ONLY a valid JSON object containing:
{
  "CandidateName": "full name",
  "ContactInfo": "email and/or phone",
  "Skills": ["skill1", "skill2", "..."],
  "Experience": ["experience1", "experience2", "..."],
  "Education": ["education1", "education2", "..."],
  "Certifications": ["cert1", "cert2", "..."],
  "SkillMatch": "X%",
  "ExperienceMatch": "X%",
  "QualificationMatch": "X%",
  "OverallMatch": "X%",
  "MatchedSkills": ["skill1", "skill2", "..."],
  "MissingSkills": ["skill1", "skill2", "..."],
  "Strengths": ["strength1", "strength2", "..."],
  "Areas_for_Improvement": ["area1", "area2", "..."],
  "Recommendation": "shortlist/reject/further review"
}

Important: Only provide the JSON object. No additional text, no markdown formatting."#;
