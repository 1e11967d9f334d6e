//! HTML pages: directory listings and the usage guide.

use std::borrow::Cow;
use std::fmt::{self, Write};

use memkv_core_store::{Entry, Prefix};

use crate::request_path::encode_segment;

const STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", system-ui, sans-serif; padding: 40px; color: #111; max-width: 800px; margin: 0 auto; line-height: 1.6; }
        h1 { font-size: 1.2rem; font-weight: 600; margin-bottom: 2rem; }
        ul { list-style: none; padding: 0; }
        li { border-bottom: 1px solid #eee; padding: 8px 0; }
        li:last-child { border-bottom: none; }
        a { text-decoration: none; color: #0066cc; }
        a:hover { text-decoration: underline; }
        .dir { font-weight: 600; }
        .dir::after { content: "/"; color: #999; }
        pre { background: #f8f8f8; padding: 15px; border-radius: 4px; overflow-x: auto; font-size: 0.9rem; border: 1px solid #eee; }
        code { font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace; }
        .section { margin-bottom: 2rem; }
"#;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn write_head(out: &mut String, title: &str) -> fmt::Result {
    write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta charset=\"UTF-8\">\n    \
         <title>{}</title>\n    <style>{}    </style>\n</head>\n<body>\n",
        escape_html(title),
        STYLE
    )
}

/// Render the listing page for `prefix`.
///
/// Entries are rendered in the order given; the store already sorts them
/// directories first. Links are relative to the listed directory, so the
/// page only works when served from a path ending in `/`.
pub fn listing(prefix: &Prefix, entries: &[Entry]) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(1024 + entries.len() * 64);
    let title = format!("Listing for /{}", prefix);

    write_head(&mut out, &title)?;
    writeln!(out, "    <h1>{}</h1>", escape_html(&title))?;
    writeln!(out, "    <hr>")?;
    writeln!(out, "    <ul>")?;
    if !prefix.is_root() {
        writeln!(
            out,
            "        <li><a href=\"../\">.. (Parent Directory)</a></li>"
        )?;
    }
    for entry in entries {
        let href = encode_segment(&entry.name);
        let name = escape_html(&entry.name);
        if entry.is_dir() {
            writeln!(
                out,
                "        <li><a href=\"{}/\" class=\"dir\">{}</a></li>",
                href, name
            )?;
        } else {
            writeln!(out, "        <li><a href=\"{}\">{}</a></li>", href, name)?;
        }
    }
    writeln!(out, "    </ul>")?;
    writeln!(out, "</body>\n</html>")?;
    Ok(out)
}

/// Render the usage guide, quoting the configured upload ceiling.
pub fn help(max_upload_mib: u64) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(2048);
    write_head(&mut out, "Help - memkv")?;
    write!(
        out,
        r#"    <h1>Usage Guide</h1>
    <div class="section">
        <p>An in-memory key-value store. Keys are URL paths; values are whatever you upload.</p>
    </div>
    <div class="section">
        <strong>Upload content (POST)</strong>
        <pre><code># Upload text (stored as text/plain)
curl -d "hello world" http://localhost:8080/my/path

# Upload with an explicit Content-Type
curl -X POST -H "Content-Type: application/json" -d '{{"key":"value"}}' http://localhost:8080/api/data</code></pre>
    </div>
    <div class="section">
        <strong>Retrieve content (GET)</strong>
        <pre><code># Fetch a value with its stored Content-Type
curl http://localhost:8080/my/path

# List a directory (path ends with /)
curl http://localhost:8080/my/</code></pre>
    </div>
    <div class="section">
        <strong>Notes</strong>
        <ul>
            <li>Max upload size: {} MiB (configurable with --max-size).</li>
            <li>Paths ending in / and the path "help" cannot be used for POST.</li>
            <li>Requesting a directory without its trailing slash redirects to the listing.</li>
            <li>Values live in memory only and are lost on restart.</li>
        </ul>
    </div>
</body>
</html>
"#,
        max_upload_mib
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_leaves_plain_text_borrowed() {
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&#34;x&#34;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn root_listing_has_no_parent_link() {
        let html = listing(&Prefix::root(), &[Entry::file("a")]).unwrap();
        assert!(html.contains("<title>Listing for /</title>"));
        assert!(!html.contains("Parent Directory"));
    }

    #[test]
    fn nested_listing_has_parent_link() {
        let prefix = Prefix::parse("docs/").unwrap();
        let html = listing(&prefix, &[]).unwrap();
        assert!(html.contains("Listing for /docs/"));
        assert!(html.contains(r#"<a href="../">.. (Parent Directory)</a>"#));
    }

    #[test]
    fn directories_link_with_trailing_slash() {
        let entries = [Entry::directory("y"), Entry::file("w")];
        let html = listing(&Prefix::root(), &entries).unwrap();
        assert!(html.contains(r#"<a href="y/" class="dir">y</a>"#));
        assert!(html.contains(r#"<a href="w">w</a>"#));
        assert!(html.find("href=\"y/\"").unwrap() < html.find("href=\"w\"").unwrap());
    }

    #[test]
    fn entry_names_are_escaped_and_encoded() {
        let html = listing(&Prefix::root(), &[Entry::file("<b> & c")]).unwrap();
        assert!(html.contains(r#"href="%3Cb%3E%20%26%20c""#));
        assert!(html.contains("&lt;b&gt; &amp; c</a>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn help_mentions_limit() {
        let html = help(42).unwrap();
        assert!(html.contains("Max upload size: 42 MiB"));
        assert!(html.contains(r#"'{"key":"value"}'"#));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
}
