use candybox::prelude::*;
use candybox::table::{MarkdownAlignment, collect_data_table, impl_record, to_markdown_table};
use candybox::text::NumberStyles;
use candybox::time::{Culture, DateTimeStyles};
use candybox::verify::{VerifyError, between};
use chrono::{NaiveDate, Weekday};

struct Download {
    file: String,
    size: u64,
}

impl_record!(Download { file as "File", size as "Bytes" });

#[test]
fn test_string_extensions() {
    assert!("user@example.com".is_email());
    assert!("12,345".is_int32(NumberStyles::NUMBER));
    assert_eq!("héllo".reverse_chars(), "olléh");
    assert_eq!("<b>".html_encode(), "&lt;b&gt;");
}

#[test]
fn test_enum_extensions() {
    assert_eq!(Weekday::Mon.name(), "Monday");
    assert_eq!(Weekday::Sat.int_value(), 6);
}

#[test]
fn test_date_extensions() {
    let culture: Culture = "en-US".parse().unwrap();
    assert!("3/14/2024".is_date_time(Some(&culture), DateTimeStyles::NONE));
    let value = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap().and_hms_opt(8, 0, 0).unwrap();
    assert_eq!(value.first_day_of_month().to_date_time_string().unwrap(), "2024-03-01 00:00:00");
}

#[test]
fn test_file_sizes_in_a_markdown_table() {
    let downloads = [
        Download { file: "a.zip".into(), size: 2048 },
        Download { file: "b.iso".into(), size: 3 * 1024 * 1024 },
    ];
    let table = collect_data_table(&downloads).unwrap();
    assert_eq!(
        to_markdown_table(&table, MarkdownAlignment::Right),
        "|File|Bytes|\n|---:|---:|\n|a.zip|2048|\n|b.iso|3145728|\n"
    );
    assert_eq!(downloads[1].size.to_file_size_string().unwrap(), "3MB");
}

#[test]
fn test_guards() {
    assert_eq!(between(3, 1, 5, "n"), Ok(3));
    assert!(matches!(between(0, 1, 5, "n"), Err(VerifyError::OutOfRange { name: "n", .. })));
}
