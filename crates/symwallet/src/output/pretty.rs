//! Pretty output formatting.

use symwallet_core::metadata::MetadataModel;
use symwallet_core::transaction::TransactionDetails;
use symwallet_core::validation::ValidationFailure;

/// Format a metadata entry for display.
pub fn format_metadata(metadata: &MetadataModel) -> String {
    let mut output = format!(
        "{} = {}\n  ID: {}\n  Type: {}\n  Source: {}\n  Target: {}",
        metadata.scoped_metadata_key,
        metadata.value,
        metadata.metadata_id,
        metadata.metadata_type,
        metadata.source_address,
        metadata.target_address,
    );
    if let Some(target_id) = &metadata.target_id {
        output.push_str(&format!("\n  Target ID: {}", target_id));
    }
    output
}

/// Format one emission of a metadata stream.
pub fn format_metadata_list(label: &str, entries: &[MetadataModel]) -> String {
    if entries.is_empty() {
        return format!("{} METADATA: none", label.to_uppercase());
    }
    let mut output = format!("{} METADATA ({})\n", label.to_uppercase(), entries.len());
    output.push_str(&"-".repeat(40));
    for entry in entries {
        output.push_str(&format!("\n{}", format_metadata(entry)));
        output.push('\n');
    }
    output
}

/// Format validation results.
pub fn format_failures(value: &str, failures: &[ValidationFailure]) -> String {
    if failures.is_empty() {
        return format!("{:?} is valid", value);
    }
    let mut output = format!("{:?} is invalid ({})", value, failures.len());
    for failure in failures {
        output.push_str(&format!("\n  [{}] {}", failure.message, failure));
    }
    output
}

/// Format transaction details as aligned rows.
pub fn format_details(details: &TransactionDetails) -> String {
    details
        .rows()
        .iter()
        .map(|(label, value)| format!("{:<14} {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}
