use super::*;

use nazdone_core::PricingConfig;
use nazdone_scraper::PageFetcher;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn parses_extract_with_file() {
    let cli = Cli::try_parse_from([
        "nazdone-cli",
        "extract",
        "--url",
        "https://shop.example/product/1/a/",
        "--file",
        "page.html",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Commands::Extract { url, file } => {
            assert_eq!(url, "https://shop.example/product/1/a/");
            assert_eq!(file, Some(PathBuf::from("page.html")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(cli.markup.is_none());
}

#[test]
fn parses_extract_without_file_reads_stdin() {
    let cli = Cli::try_parse_from(["nazdone-cli", "extract", "--url", "u"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Extract { file: None, .. }));
}

#[test]
fn extract_requires_url() {
    assert!(Cli::try_parse_from(["nazdone-cli", "extract"]).is_err());
}

#[test]
fn parses_scrape_with_multiple_urls_and_markup() {
    let cli = Cli::try_parse_from([
        "nazdone-cli",
        "scrape",
        "https://shop.example/product/1/a/",
        "https://shop.example/product/2/b/",
        "--markup",
        "150000",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.markup, Some(150_000));
    match cli.command {
        Commands::Scrape { urls } => assert_eq!(urls.len(), 2),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn scrape_requires_at_least_one_url() {
    assert!(Cli::try_parse_from(["nazdone-cli", "scrape"]).is_err());
}

#[test]
fn parses_rank_labels() {
    let cli = Cli::try_parse_from(["nazdone-cli", "rank", "M", "XL", "110"])
        .expect("expected valid cli args");
    match cli.command {
        Commands::Rank { labels } => assert_eq!(labels, vec!["M", "XL", "110"]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn no_command_is_an_error() {
    assert!(Cli::try_parse_from(["nazdone-cli"]).is_err());
}

#[test]
fn rank_report_picks_first_of_tied_largest() {
    let labels: Vec<String> = ["M", "L", "L"].iter().map(|s| (*s).to_string()).collect();
    let report = commands::build_rank_report(&labels);

    assert_eq!(report.largest.as_deref(), Some("L"));
    assert_eq!(report.labels.len(), 3);
    assert!((report.labels[0].rank - 3.0).abs() < f64::EPSILON);
    assert!((report.labels[1].rank - 4.0).abs() < f64::EPSILON);
}

#[test]
fn rank_report_numeric_outranks_codes() {
    let labels: Vec<String> = ["4XL", "110"].iter().map(|s| (*s).to_string()).collect();
    let report = commands::build_rank_report(&labels);
    assert_eq!(report.largest.as_deref(), Some("110"));
}

#[test]
fn extract_html_wraps_single_record_in_batch() {
    let html = r#"<h1>Tee</h1><script>window.p = {"sizes":[{"label":"M","price":100000},{"label":"XL","price":150000}],"colors":[]};</script>"#;
    let batch = commands::extract_html(
        "https://shop.example/product/8/tee/",
        html,
        &PricingConfig::default(),
    );

    assert!(batch.ok);
    assert_eq!(batch.products.len(), 1);
    let record = &batch.products[0];
    assert_eq!(record.product_id.as_deref(), Some("8"));
    assert_eq!(record.calc.chosen_size_label.as_deref(), Some("XL"));
    assert_eq!(record.calc.final_price, Some(350_000));
}

#[tokio::test]
async fn scrape_urls_keeps_successes_and_counts_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product/1/ok/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Ok</h1>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/product/2/gone/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = PageFetcher::new(5, "nazdone-test/0.1", 0, 0).expect("fetcher");
    let urls = vec![
        format!("{}/product/1/ok/", server.uri()),
        format!("{}/product/2/gone/", server.uri()),
    ];
    let (batch, failed) =
        commands::scrape_urls(&fetcher, &urls, 2, &PricingConfig::default()).await;

    assert_eq!(failed, 1);
    assert_eq!(batch.products.len(), 1);
    assert_eq!(batch.products[0].title, "Ok");
    assert_eq!(batch.products[0].product_id.as_deref(), Some("1"));
}
