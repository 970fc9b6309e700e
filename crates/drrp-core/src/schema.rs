//! Arrow schema for exported DRRP matches.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float32Builder, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::role::RoleMatch;

/// Flat schema, one row per refined clause.
pub fn drrp_match_schema() -> Schema {
    Schema::new(vec![
        Field::new("law_name", DataType::Utf8, false),
        Field::new("provision", DataType::Utf8, false),
        Field::new("drrp_type", DataType::Utf8, false),
        Field::new("holder", DataType::Utf8, false),
        Field::new("clause", DataType::Utf8, false),
        Field::new("confidence", DataType::Float32, false),
        Field::new("captured_action", DataType::Utf8, true),
    ])
}

/// Convert matches for one provision into a RecordBatch.
pub fn matches_to_batch<'a>(
    law_name: &str,
    provision: &str,
    matches: impl IntoIterator<Item = &'a RoleMatch>,
) -> Result<RecordBatch, ArrowError> {
    let mut law = StringBuilder::new();
    let mut prov = StringBuilder::new();
    let mut drrp_type = StringBuilder::new();
    let mut holder = StringBuilder::new();
    let mut clause = StringBuilder::new();
    let mut confidence = Float32Builder::new();
    let mut captured = StringBuilder::new();

    for m in matches {
        law.append_value(law_name);
        prov.append_value(provision);
        drrp_type.append_value(m.role.as_str());
        holder.append_value(&m.holder);
        clause.append_value(&m.clause);
        confidence.append_value(m.confidence);
        captured.append_option(m.captured_action.as_deref());
    }

    let columns: Vec<ArrayRef> = vec![
        Arc::new(law.finish()),
        Arc::new(prov.finish()),
        Arc::new(drrp_type.finish()),
        Arc::new(holder.finish()),
        Arc::new(clause.finish()),
        Arc::new(confidence.finish()),
        Arc::new(captured.finish()),
    ];
    RecordBatch::try_new(Arc::new(drrp_match_schema()), columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use arrow::array::{Array, Float32Array, StringArray};

    #[test]
    fn schema_has_expected_fields() {
        let schema = drrp_match_schema();
        assert_eq!(schema.fields().len(), 7);
        assert!(schema.field_with_name("holder").is_ok());
        assert!(schema.field_with_name("captured_action").unwrap().is_nullable());
    }

    #[test]
    fn batch_rows_match_input() {
        let ms = vec![
            RoleMatch {
                holder: "Gvt: Agency: Environment Agency".into(),
                role: Role::Responsibility,
                raw_match: "The Environment Agency must publish".into(),
                captured_action: Some("publish a report.".into()),
                clause: "The Environment Agency must publish a report.".into(),
                confidence: 0.85,
            },
            RoleMatch {
                holder: "Org: Employer".into(),
                role: Role::Duty,
                raw_match: "The employer shall".into(),
                captured_action: None,
                clause: "The employer shall...".into(),
                confidence: 0.35,
            },
        ];
        let batch = matches_to_batch("UK_ukpga_1995_25", "section/41", &ms).unwrap();
        assert_eq!(batch.num_rows(), 2);

        let types = batch
            .column_by_name("drrp_type")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(types.value(0), "Responsibility");
        assert_eq!(types.value(1), "Duty");

        let conf = batch
            .column_by_name("confidence")
            .unwrap()
            .as_any()
            .downcast_ref::<Float32Array>()
            .unwrap();
        assert!((conf.value(0) - 0.85).abs() < 1e-6);

        let captured = batch.column_by_name("captured_action").unwrap();
        assert!(!captured.is_null(0));
        assert!(captured.is_null(1));
    }

    #[test]
    fn empty_batch() {
        let batch = matches_to_batch("law", "s.1", std::iter::empty::<&RoleMatch>()).unwrap();
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 7);
    }
}
