use clap::Parser;
use paged_text_viewer::*;
use std::io::Write;
use tempfile::NamedTempFile;

// Helper function to create test files
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_open_page_through_and_back() {
        let content: String = (1..=12).map(|i| format!("Line {}\n", i)).collect();
        let temp_file = create_test_file(&content);

        let mut reader = PagedReader::new();
        reader.load(temp_file.path()).unwrap();
        assert_eq!(reader.page_size(), PAGE_SIZE);
        assert_eq!(reader.line_count(), 12);
        assert_eq!(reader.current_page(), "Line 1\nLine 2\nLine 3\nLine 4\nLine 5\n");
        assert_eq!(reader.progress().unwrap(), 0);

        let second = reader.next_page();
        assert_eq!(second, "Line 6\nLine 7\nLine 8\nLine 9\nLine 10\n");
        let progress = reader.progress().unwrap();
        assert!(progress > 0 && progress < 100);

        assert_eq!(reader.next_page(), "Line 11\nLine 12\n");
        assert_eq!(reader.next_page(), "");
        assert_eq!(reader.progress().unwrap(), 100);

        assert_eq!(reader.previous_page(), "Line 11\nLine 12\n");
        assert_eq!(reader.previous_page(), second);
        assert_eq!(reader.previous_page(), "Line 1\nLine 2\nLine 3\nLine 4\nLine 5\n");
        assert_eq!(reader.progress().unwrap(), 0);
    }

    #[test]
    fn test_progress_never_decreases_while_paging_forward() {
        let content: String = (0..40).map(|i| format!("{}\n", "x".repeat(i))).collect();
        let temp_file = create_test_file(&content);

        let mut reader = PagedReader::new();
        reader.load(temp_file.path()).unwrap();

        let mut last = reader.progress().unwrap();
        while reader.current_offset() < reader.line_count() {
            reader.next_page();
            let progress = reader.progress().unwrap();
            assert!(progress >= last);
            assert!(progress <= 100);
            last = progress;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_configured_reader_from_args() {
        let temp_file = create_test_file("a\nb\nc\nd\ne\nf\ng\n");
        let path = temp_file.path().to_str().unwrap();

        let args = Args::try_parse_from([
            "paged-text-viewer",
            path,
            "--paging",
            "overshoot",
            "--page-size",
            "5",
        ])
        .unwrap();
        let mut reader = args.build_reader().unwrap();
        reader.load(args.file.as_ref().unwrap()).unwrap();

        assert_eq!(reader.current_page(), "a\nb\nc\nd\ne\n");
        assert_eq!(reader.next_page(), "f\ng\n");
        assert_eq!(reader.current_offset(), 5);
        assert_eq!(reader.next_page(), "");
        assert_eq!(reader.current_offset(), 10);
        assert_eq!(reader.progress().unwrap(), 100);
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut reader = PagedReader::new();

        let err = reader.load(dir.path().join("absent.txt")).unwrap_err();
        let not_found = err.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
        });
        assert!(not_found);
        assert!(!reader.is_loaded());
    }

    #[test]
    fn test_auto_encoding_reads_legacy_text() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"na\xefve\r\nr\xe9sum\xe9\r\n").unwrap();
        temp_file.flush().unwrap();

        let mut reader = PagedReader::new();
        assert!(reader.load(temp_file.path()).is_err());

        reader.set_encoding_choice(EncodingChoice::Auto);
        reader.load(temp_file.path()).unwrap();
        assert_eq!(reader.current_page(), "naïve\r\nrésumé\r\n");
        assert_eq!(reader.encoding().name(), "windows-1252");
        assert!(available_encodings()
            .iter()
            .any(|(_, encoding)| *encoding == reader.encoding()));
    }

    #[test]
    fn test_edge_cases() {
        // Empty file
        let empty_file = create_test_file("");
        let mut reader = PagedReader::new();
        reader.load(empty_file.path()).unwrap();
        assert_eq!(reader.line_count(), 0);
        assert_eq!(reader.current_page(), "");
        assert_eq!(reader.next_page(), "");
        assert_eq!(reader.progress().unwrap(), 0);

        // Single line without newline
        let single_line = create_test_file("single line");
        reader.load(single_line.path()).unwrap();
        assert_eq!(reader.current_page(), "single line");

        // File with only newlines
        let newlines = create_test_file("\n\n\n");
        reader.load(newlines.path()).unwrap();
        assert_eq!(reader.line_count(), 3);
        assert_eq!(reader.current_page(), "\n\n\n");
    }

    #[test]
    fn test_reader_is_not_shared_between_instances() {
        let first = create_test_file("one\n");
        let second = create_test_file("two\n");

        let mut a = PagedReader::new();
        let mut b = PagedReader::new();
        a.load(first.path()).unwrap();
        b.load(second.path()).unwrap();

        assert_eq!(a.current_page(), "one\n");
        assert_eq!(b.current_page(), "two\n");
        assert_eq!(a.mode(), PagingMode::Clamped);
    }
}
