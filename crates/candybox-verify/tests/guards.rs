use candybox_verify::{
    VerifyError, between, is_false, not_null, not_null_or_empty, not_null_or_white_space, valid_url,
};

#[derive(Debug)]
struct Job {
    name:     String,
    endpoint: String,
    tags:     Vec<String>,
    retries:  u8,
}

fn job(
    name: Option<&str>,
    endpoint: Option<&str>,
    tags: Option<&[String]>,
    retries: u8,
) -> candybox_verify::Result<Job> {
    let name = not_null_or_white_space(name, "name")?;
    let endpoint = valid_url(endpoint, true, "endpoint")?;
    let tags = not_null_or_empty(tags, "tags")?;
    let retries = between(retries, 0, 5, "retries")?;
    is_false(name == "root", "reserved job name", "name")?;

    Ok(Job {
        name: name.to_string(),
        endpoint: endpoint.to_string(),
        tags: tags.to_vec(),
        retries,
    })
}

fn tags() -> Vec<String> { vec!["nightly".to_string()] }

#[test]
fn test_guards_chain_into_values() {
    let tags = tags();
    let endpoint = "https://example.com/run?now=1";
    let job = job(Some("backup"), Some(endpoint), Some(tags.as_slice()), 3).unwrap();
    assert_eq!(job.name, "backup");
    assert_eq!(job.endpoint, endpoint);
    assert_eq!(job.tags, ["nightly"]);
    assert_eq!(job.retries, 3);
}

#[test]
fn test_first_failing_guard_names_its_parameter() {
    let tags = tags();
    let cases = [
        (job(None, Some("https://example.com"), Some(tags.as_slice()), 1), "name"),
        (job(Some("a"), Some("https://example.com#top"), Some(tags.as_slice()), 1), "endpoint"),
        (job(Some("a"), Some("https://example.com"), Some(&[][..]), 1), "tags"),
        (job(Some("a"), Some("https://example.com"), Some(tags.as_slice()), 9), "retries"),
        (job(Some("root"), Some("https://example.com"), Some(tags.as_slice()), 1), "name"),
    ];
    for (result, name) in cases {
        assert_eq!(result.unwrap_err().name(), name);
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(not_null::<u8>(None, "id").unwrap_err().to_string(), "value cannot be null: 'id'");
    let err = valid_url(Some("ftp//broken"), false, "source").unwrap_err();
    assert_eq!(err, VerifyError::InvalidUrl { name: "source", url: "ftp//broken".into() });
    assert_eq!(err.to_string(), "the `ftp//broken` is not a valid URL ('source')");
}
