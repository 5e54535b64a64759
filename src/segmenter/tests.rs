use super::*;

/// A realistic pasted blob: several C# files introduced by `//` delimiter
/// lines, with a bit of chat preamble on top.
const PASTED_CSHARP_BLOB: &str = r#"Sure, here are the files:

// Models/LoginRequest.cs
public class LoginRequest
{
    public string Username { get; set; }
    public string Password { get; set; }
}

// Models/LoginResponse.cs
public class LoginResponse
{
    public string Token { get; set; }
}

// Controllers/AuthController.cs
[ApiController]
public class AuthController : ControllerBase
{
    private readonly IAuthService _authService;
}
"#;

#[test]
fn test_fixture_blob_yields_all_files_in_order() {
    let segments = split_blob(PASTED_CSHARP_BLOB, "//");

    let paths: Vec<&str> = segments.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "Models/LoginRequest.cs",
            "Models/LoginResponse.cs",
            "Controllers/AuthController.cs",
        ]
    );
}

#[test]
fn test_fixture_blob_contents_are_exact() {
    let segments = split_blob(PASTED_CSHARP_BLOB, "//");

    assert!(segments[0].content.starts_with("public class LoginRequest"));
    assert!(segments[0].content.ends_with('}'));
    assert!(segments[1].content.contains("public string Token"));
    assert!(segments[2].content.contains("IAuthService _authService"));
}

#[test]
fn test_triple_slash_blob_with_triple_slash_marker() {
    let blob = "/// src/main.rs\nfn main() {}\n\n/// src/lib.rs\npub fn run() {}\n";
    let segments = split_blob(blob, DEFAULT_MARKER);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].path, "src/main.rs");
    assert_eq!(segments[0].content, "fn main() {}");
    assert_eq!(segments[1].path, "src/lib.rs");
    assert_eq!(segments[1].content, "pub fn run() {}");
}

#[test]
fn test_segmenter_reuse_across_blobs() {
    let segmenter = Segmenter::new(DEFAULT_MARKER);

    let first = segmenter.split("/// a.txt\none\n");
    let second = segmenter.split("/// b.txt\ntwo\n");

    assert_eq!(first[0].path, "a.txt");
    assert_eq!(second[0].path, "b.txt");
}

#[test]
fn test_delimiter_body_may_contain_marker_mid_line() {
    // Doc comments inside a file body only count when they start a line
    // and name a path; indented ones are body text.
    let blob = "/// a.rs\n    /// this is a doc comment\nfn f() {}\n";
    let segments = split_blob(blob, DEFAULT_MARKER);

    assert_eq!(segments.len(), 1);
    assert!(segments[0].content.contains("doc comment"));
}
