//! Ordered collection of field validation messages.
//!
//! `validator` reports errors in a hash map, so field order is not stable.
//! Inputs declare their field order once and [`ordered_messages`] flattens
//! the errors in that order, keeping each field's rule order.

use validator::{Validate, ValidationError, ValidationErrors};

/// An input validated by the persistence layer before it is written.
pub trait ValidatedInput: Validate {
    /// Field names, as declared on the struct, in reporting order.
    const FIELD_ORDER: &'static [&'static str];

    /// Every violated rule's message; empty when the input is valid.
    fn validation_messages(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => ordered_messages(&errors, Self::FIELD_ORDER),
        }
    }
}

pub fn ordered_messages(errors: &ValidationErrors, field_order: &[&str]) -> Vec<String> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let field = field.to_string();
            let messages = field_errors
                .iter()
                .map(|error| message_for(&field, error))
                .collect();
            (field, messages)
        })
        .collect();

    // Undeclared fields go last, alphabetically.
    fields.sort_by(|(a, _), (b, _)| {
        rank(field_order, a)
            .cmp(&rank(field_order, b))
            .then_with(|| a.cmp(b))
    });

    fields.into_iter().flat_map(|(_, messages)| messages).collect()
}

fn rank(field_order: &[&str], field: &str) -> usize {
    field_order
        .iter()
        .position(|declared| *declared == field)
        .unwrap_or(usize::MAX)
}

fn message_for(field: &str, error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| format!("{} is invalid", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "zeta is empty"))]
        zeta: String,
        #[validate(length(min = 1, message = "alpha is empty"))]
        alpha: String,
        #[validate(length(min = 2))]
        beta: String,
    }

    impl ValidatedInput for Sample {
        const FIELD_ORDER: &'static [&'static str] = &["zeta", "alpha"];
    }

    #[test]
    fn test_messages_follow_declared_order() {
        let sample = Sample {
            zeta: String::new(),
            alpha: String::new(),
            beta: "x".to_string(),
        };

        assert_eq!(
            sample.validation_messages(),
            vec!["zeta is empty", "alpha is empty", "beta is invalid"]
        );
    }

    #[test]
    fn test_valid_input_has_no_messages() {
        let sample = Sample {
            zeta: "z".to_string(),
            alpha: "a".to_string(),
            beta: "bb".to_string(),
        };

        assert!(sample.validation_messages().is_empty());
    }
}
