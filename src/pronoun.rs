// Gendered pronouns for characters, keyed on the neutral form of the word.
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    He,
    She,
    #[default]
    They,
    It,
}

// The neutral word a pronoun is looked up by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PronounForm {
    They,
    Them,
    Their,
    Theirs,
    Theirself,
}

/// The gendered version of a neutral pronoun, e.g. `pronoun(PronounForm::Them, Gender::She)` is "her".
pub fn pronoun(form: PronounForm, gender: Gender) -> &'static str {
    use PronounForm::*;
    match gender {
        Gender::He => match form {
            They => "he",
            Them => "him",
            Their | Theirs => "his",
            Theirself => "himself",
        },
        Gender::She => match form {
            They => "she",
            Them | Their => "her",
            Theirs => "hers",
            Theirself => "herself",
        },
        Gender::They => match form {
            They => "they",
            Them => "them",
            Their => "their",
            Theirs => "theirs",
            Theirself => "theirself",
        },
        Gender::It => match form {
            They | Them => "it",
            Their | Theirs => "its",
            Theirself => "itself",
        },
    }
}

// String keyed lookup for script authors. None when either the word or the gender is unknown.
pub fn pronoun_for(word: &str, gender: &str) -> Option<&'static str> {
    let form = PronounForm::from_str(word).ok()?;
    let gender = Gender::from_str(gender).ok()?;
    Some(pronoun(form, gender))
}

fn pronoun_field_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceCell<Option<Regex>> = OnceCell::new();
    PATTERN
        .get_or_init(|| Regex::new(r"PRONOUN: ([^;]*);").ok())
        .as_ref()
}

/// The gender named in an entry's `PRONOUN: he;` field.
///
/// Falls back to `they` when the field is missing, unclosed or names an unknown pronoun.
pub fn world_info_pronoun(entry: &str) -> Gender {
    pronoun_field_pattern()
        .and_then(|pattern| pattern.captures(entry))
        .and_then(|captures| Gender::from_str(captures[1].trim()).ok())
        .unwrap_or_default()
}
