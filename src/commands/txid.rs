//! `caresync txid` handlers.

use std::io::Write;

use crate::context::ServiceContext;
use crate::txid::{TransactionId, TransactionIdKind};

/// Which ID shape to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Timestamped form.
    Long,
    /// Display-only form.
    Short,
}

/// Print `count` freshly generated IDs, one per line.
///
/// # Errors
///
/// Returns an error string if writing to `out` fails.
pub fn generate(
    ctx: &ServiceContext,
    form: Form,
    count: u32,
    out: &mut impl Write,
) -> Result<(), String> {
    let generator = ctx.id_generator();
    for _ in 0..count {
        let id = match form {
            Form::Long => generator.generate_long(),
            Form::Short => generator.generate_short(),
        };
        writeln!(out, "{id}").map_err(|e| format!("Failed to write output: {e}"))?;
    }
    Ok(())
}

/// Report whether `id` has a transaction-ID shape.
///
/// # Errors
///
/// Returns `invalid transaction id: <id>` when it has neither shape, or an
/// error string if writing to `out` fails.
pub fn validate(id: &str, out: &mut impl Write) -> Result<(), String> {
    let id = TransactionId::parse(id).map_err(|e| e.to_string())?;
    let report = match (id.kind(), id.issued_at()) {
        (TransactionIdKind::Long, Some(at)) => {
            format!("valid long\nissued at {}", at.format("%Y-%m-%d %H:%M:%S"))
        }
        (TransactionIdKind::Long, None) => "valid long".to_string(),
        (TransactionIdKind::Short, _) => "valid short".to_string(),
    };
    writeln!(out, "{report}").map_err(|e| format!("Failed to write output: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txid::{is_valid_long, is_valid_short};

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(buf).lines().map(str::to_string).collect()
    }

    #[test]
    fn generate_prints_requested_count() {
        let ctx = ServiceContext::live();
        let mut out = Vec::new();
        generate(&ctx, Form::Long, 3, &mut out).unwrap();
        let ids = lines(&out);
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| is_valid_long(id)));

        let mut out = Vec::new();
        generate(&ctx, Form::Short, 2, &mut out).unwrap();
        assert!(lines(&out).iter().all(|id| is_valid_short(id)));
    }

    #[test]
    fn validate_reports_kind_and_timestamp() {
        let mut out = Vec::new();
        validate("CS-20241130-091502-4821", &mut out).unwrap();
        assert_eq!(lines(&out), vec!["valid long", "issued at 2024-11-30 09:15:02"]);

        let mut out = Vec::new();
        validate("CS-20241399-256199-1234", &mut out).unwrap();
        assert_eq!(lines(&out), vec!["valid long"]);

        let mut out = Vec::new();
        validate("CS-1234-5678", &mut out).unwrap();
        assert_eq!(lines(&out), vec!["valid short"]);
    }

    #[test]
    fn validate_rejects_bad_shape() {
        let mut out = Vec::new();
        let err = validate("CS-2024113-123456-1234", &mut out).unwrap_err();
        assert_eq!(err, "invalid transaction id: CS-2024113-123456-1234");
        assert!(out.is_empty());
    }
}
