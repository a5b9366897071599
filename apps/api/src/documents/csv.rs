//! Job descriptions from a spreadsheet export.

use tracing::warn;

/// Description column names, in lookup order.
const DESCRIPTION_COLUMNS: [&str; 7] = [
    "job_description",
    "jobdescription",
    "description",
    "jd",
    "job",
    "text",
    "Job Description",
];

/// Title column names, in lookup order.
const TITLE_COLUMNS: [&str; 4] = ["job_title", "title", "position", "Job Title"];

pub const EMPTY_CSV_MESSAGE: &str = "The CSV file is empty.";
pub const NO_DESCRIPTION_COLUMN_MESSAGE: &str = "No recognizable job description column found.";
pub const NO_TITLE_COLUMN_MESSAGE: &str = "No recognizable job title column found.";

/// Renders every titled row as a `---` separated block:
///
/// ```text
/// ---
/// **Data Analyst:**
/// Build dashboards for the sales team.
/// ```
pub fn csv_to_text(data: &[u8]) -> String {
    match read_job_rows(data) {
        Ok(text) => text,
        Err(e) => {
            warn!("CSV job description could not be read: {e}");
            format!("Error reading CSV file: {e}")
        }
    }
}

fn read_job_rows(data: &[u8]) -> Result<String, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;

    if headers.iter().all(|header| header.is_empty()) || records.is_empty() {
        return Ok(EMPTY_CSV_MESSAGE.to_string());
    }

    let Some(description_idx) = find_column(&headers, &DESCRIPTION_COLUMNS) else {
        return Ok(NO_DESCRIPTION_COLUMN_MESSAGE.to_string());
    };
    let Some(title_idx) = find_column(&headers, &TITLE_COLUMNS) else {
        return Ok(NO_TITLE_COLUMN_MESSAGE.to_string());
    };

    let blocks: Vec<String> = records
        .iter()
        .filter_map(|record| {
            let title = record.get(title_idx).map(str::trim).unwrap_or_default();
            let description = record.get(description_idx).map(str::trim).unwrap_or_default();
            if title.is_empty() || description.is_empty() {
                return None;
            }
            Some(format!("---\n**{title}:**\n{description}\n"))
        })
        .collect();

    Ok(blocks.join("\n"))
}

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| headers.iter().position(|header| header == alias))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_render_as_blocks() {
        let data = b"job_title,job_description\nData Analyst,Build dashboards\nML Engineer,\"Train, ship models\"\n";
        assert_eq!(
            csv_to_text(data),
            "---\n**Data Analyst:**\nBuild dashboards\n\n---\n**ML Engineer:**\nTrain, ship models\n"
        );
    }

    #[test]
    fn test_alias_order_prefers_earlier_names() {
        let data = b"text,description,position,title\nignored,used,ignored,Used Title\n";
        assert_eq!(csv_to_text(data), "---\n**Used Title:**\nused\n");
    }

    #[test]
    fn test_rows_missing_a_value_are_skipped() {
        let data = b"title,jd\n,orphan description\nAnalyst,\nLead,Run the team\n";
        assert_eq!(csv_to_text(data), "---\n**Lead:**\nRun the team\n");
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(csv_to_text(b""), EMPTY_CSV_MESSAGE);
        assert_eq!(csv_to_text(b"title,description\n"), EMPTY_CSV_MESSAGE);
    }

    #[test]
    fn test_missing_columns() {
        assert_eq!(csv_to_text(b"title,salary\nAnalyst,90k\n"), NO_DESCRIPTION_COLUMN_MESSAGE);
        assert_eq!(csv_to_text(b"name,description\nAnalyst,x\n"), NO_TITLE_COLUMN_MESSAGE);
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let text = csv_to_text(b"title,description\n\xff\xfe,x\n");
        assert!(text.starts_with("Error reading CSV file"));
    }
}
