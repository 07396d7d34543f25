use crate::tools::log_message;
use dto::csv_member::CsvMemberRow;
use dto::member::NewMember;

/// Parse a bulk-import CSV body into members to create.
/// Malformed rows are collected as error messages rather than aborting the
/// import, so one bad line never loses the rest of the file.
pub fn parse_members_csv(content: &str) -> (Vec<NewMember>, Vec<String>) {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut members = Vec::new();
    let mut errors = Vec::new();

    for (index, record) in reader.deserialize::<CsvMemberRow>().enumerate() {
        // The header occupies the first line of the file.
        let row_number = index + 2;
        match record {
            Ok(row) => match NewMember::try_from(row) {
                Ok(member) => members.push(member),
                Err(error) => errors.push(format!("Row {row_number}: {error}")),
            },
            Err(error) => {
                log_message("Error while reading member row")(&error);
                errors.push(format!("Row {row_number}: {error}"));
            }
        }
    }

    (members, errors)
}
