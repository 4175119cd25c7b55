use std::fs;

use pretty_assertions::assert_eq;
use scribe_engine::{
    decode_page, extract_article_html, puzzle_url, write_atomic, Converter, FetchSettings,
    Fetcher, MdxConverter, ReqwestFetcher,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    scribe_logging::initialize_for_tests();
}

const PUZZLE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<head>
<meta charset="utf-8"/>
<title>Day 18 - Advent of Code 2019</title>
</head>
<body>
<header><div><h1 class="title-global"><a href="https://adventofcode.com/">Advent of Code</a></h1></div><div class="user">anonymous</div></header>
<main>
<article class="day-desc">
<h2>--- Day 18: Many-Worlds Interpretation ---</h2>
<p>As you approach Neptune, a planetary security system detects you and activates a <em>giant tractor beam</em>!</p>
<p>You have <code>26</code> keys, one for each door.</p>
<pre><code>#########
#b.A.@.a#
#########</code></pre>
<p>Collect every key:</p>
<ul>
<li>walk to <strong>a</strong></li>
<li>unlock <strong>A</strong></li>
</ul>
</article>
</main>
</body>
</html>
"#;

#[tokio::test]
async fn fetch_stage_convert_persist_round_trip() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2019/day/18"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(PUZZLE_PAGE, "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("temp dir");
    let staging = dir.path().join("article.html");
    let output = dir.path().join("output.mdx");

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = puzzle_url(&server.uri(), 2019, 18).expect("valid url");
    let page = fetcher.fetch(url.as_str()).await.expect("fetch ok");

    let decoded = decode_page(&page.bytes, page.content_type.as_deref()).expect("decodes");
    assert_eq!(decoded.encoding, "UTF-8");

    let article = extract_article_html(&decoded.text).expect("article present");
    assert!(article.starts_with(r#"<article class="day-desc">"#));
    write_atomic(&staging, &article).expect("staged");

    let staged = fs::read_to_string(&staging).expect("staged html");
    let markdown = MdxConverter.convert(&staged).expect("converts");
    write_atomic(&output, &markdown).expect("persisted");

    let expected = r#"## --- Day 18: Many-Worlds Interpretation ---

As you approach Neptune, a planetary security system detects you and activates a *giant tractor beam*!

You have `26` keys, one for each door.

```
#########
#b.A.@.a#
#########
```

Collect every key:

- walk to **a**
- unlock **A**"#;
    assert_eq!(fs::read_to_string(&output).expect("mdx"), expected);
}
