use super::{Tone, ValidationErrors};

pub const MIN_PERSONA_CHARS: usize = 2;
pub const MIN_JOB_TO_BE_DONE_CHARS: usize = 10;

/// What the user wants out of one analysis run. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisParameters {
    pub persona: String,
    pub job_to_be_done: String,
    pub tone: Tone,
    pub include_contextual_tags: bool,
}

impl AnalysisParameters {
    pub fn new(
        persona: impl Into<String>,
        job_to_be_done: impl Into<String>,
        tone: Tone,
        include_contextual_tags: bool,
    ) -> Result<Self, ValidationErrors> {
        let persona = persona.into().trim().to_string();
        let job_to_be_done = job_to_be_done.into().trim().to_string();

        let mut errors = ValidationErrors::new();
        check_length(&persona, MIN_PERSONA_CHARS, "Persona", &mut errors);
        check_length(
            &job_to_be_done,
            MIN_JOB_TO_BE_DONE_CHARS,
            "Job to be done",
            &mut errors,
        );

        errors.into_result(Self {
            persona,
            job_to_be_done,
            tone,
            include_contextual_tags,
        })
    }

    /// Like [`AnalysisParameters::new`] but with the tone still in its submitted text
    /// form, so a bad tone is reported alongside any other field problems.
    pub fn parse(
        persona: &str,
        job_to_be_done: &str,
        tone: &str,
        include_contextual_tags: bool,
    ) -> Result<Self, ValidationErrors> {
        let parsed_tone = if tone.trim().is_empty() {
            Ok(Tone::default())
        } else {
            tone.parse::<Tone>()
        };
        let tone = parsed_tone.as_ref().copied().unwrap_or_default();

        let mut errors = match Self::new(persona, job_to_be_done, tone, include_contextual_tags)
        {
            Ok(params) => return parsed_tone.map(|_| params).map_err(ValidationErrors::single),
            Err(errors) => errors,
        };

        if let Err(tone_error) = parsed_tone {
            errors.push(tone_error);
        }
        Err(errors)
    }
}

fn check_length(value: &str, min: usize, field: &str, errors: &mut ValidationErrors) {
    if value.chars().count() < min {
        errors.push(format!("{} must be at least {} characters.", field, min));
    }
}
