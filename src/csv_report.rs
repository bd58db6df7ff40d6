use crate::types::FolderRecord;
use std::fs;
use std::io;
use std::path::Path;

const HEADER: &str = "foldername,date,size_bytes";

/// Write the full report in one shot, overwriting any existing file.
/// The folder name is the only field that can contain arbitrary bytes, so it
/// is the only one quoted; date and size are known-safe formats.
pub fn write_report(path: &Path, records: &[FolderRecord]) -> io::Result<()> {
    fs::write(path, render(records))
}

fn render(records: &[FolderRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for record in records {
        out.push_str(&format!(
            "\"{}\",{},{}\n",
            escape_quotes(&record.name),
            record.captured_date,
            record.size_bytes
        ));
    }

    out
}

fn escape_quotes(name: &str) -> String {
    name.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, size_bytes: u64) -> FolderRecord {
        FolderRecord {
            name: name.to_string(),
            captured_date: "25-08-2026".to_string(),
            size_bytes,
        }
    }

    #[test]
    fn test_render_header_only_for_no_records() {
        assert_eq!(render(&[]), "foldername,date,size_bytes\n");
    }

    #[test]
    fn test_render_quotes_name_field() {
        let out = render(&[record("alpha", 100)]);
        assert_eq!(
            out,
            "foldername,date,size_bytes\n\"alpha\",25-08-2026,100\n"
        );
    }

    #[test]
    fn test_render_doubles_embedded_quotes() {
        let out = render(&[record("a\"b", 0)]);
        assert_eq!(out, "foldername,date,size_bytes\n\"a\"\"b\",25-08-2026,0\n");
    }

    #[test]
    fn test_render_preserves_record_order() {
        let out = render(&[record("beta", 1), record("alpha", 2)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "\"beta\",25-08-2026,1");
        assert_eq!(lines[2], "\"alpha\",25-08-2026,2");
    }

    #[test]
    fn test_write_report_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.csv");
        fs::write(&path, "stale contents").unwrap();

        write_report(&path, &[record("alpha", 100)]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "foldername,date,size_bytes\n\"alpha\",25-08-2026,100\n"
        );
    }

    #[test]
    fn test_full_report_for_alpha_and_beta() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("alpha")).unwrap();
        fs::write(tmp.path().join("alpha/payload.bin"), vec![0u8; 100]).unwrap();
        fs::create_dir(tmp.path().join("beta")).unwrap();

        let subdirs = crate::scanner::immediate_subdirs(tmp.path()).unwrap();
        let records = crate::scanner::collect_records(&subdirs, "25-08-2026", true);

        let out_path = tmp.path().join("report.csv");
        write_report(&out_path, &records).unwrap();

        let written = fs::read_to_string(&out_path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "foldername,date,size_bytes");

        let alpha = lines
            .iter()
            .find(|l| l.starts_with("\"alpha\","))
            .expect("alpha row");
        let fields: Vec<&str> = alpha.split(',').collect();
        assert_eq!(fields[1], "25-08-2026");
        // Strategies may add directory-inode overhead, but never less than
        // the file contents.
        assert!(fields[2].parse::<u64>().unwrap() >= 100);

        assert!(lines.iter().any(|l| l.starts_with("\"beta\",")));
    }

    #[test]
    fn test_write_report_unwritable_destination_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing_dir").join("out.csv");
        assert!(write_report(&path, &[]).is_err());
    }
}
