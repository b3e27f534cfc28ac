use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::ProgressDrawTarget;
use schemagen::http::SchemaKind;
use schemagen::render::{self, Notification, SchemaResults, StdioClipboard, UrlForm};
use schemagen::{ClientConfig, HttpSchemaClient, Session, SubmissionState};

#[derive(Parser, Debug)]
#[command(name = "schemagen", version, about = "Generate schema.org JSON-LD for a web page")]
struct Args {
    /// Page to scrape. Read from standard input when omitted.
    url: Option<String>,

    /// Skip the Article schema
    #[arg(long)]
    no_article: bool,

    /// Skip the Breadcrumb schema
    #[arg(long)]
    no_breadcrumb: bool,

    /// Skip the FAQ schema
    #[arg(long)]
    no_faq: bool,

    /// Backend base URL (overrides SCHEMAGEN_BACKEND_URL)
    #[arg(long)]
    backend: Option<String>,

    /// Schema tab to show instead of the default one
    #[arg(long)]
    tab: Option<SchemaKind>,

    /// Copy the shown schema's snippet to stdout instead of printing the report
    #[arg(long)]
    copy: bool,

    /// With --copy, use the minified variant
    #[arg(long, requires = "copy")]
    minified: bool,

    /// Save all generated schemas as schemas.json in this directory
    #[arg(long, value_name = "DIR")]
    download: Option<PathBuf>,

    /// Print session statistics at the end
    #[arg(long)]
    stats: bool,

    /// Keep asking for URLs after each result; a blank line quits
    #[arg(long, short)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(backend) = &args.backend {
        config = config.with_backend_url(backend)?;
    }
    let client = HttpSchemaClient::new(&config)?;
    let session = Session::new();

    let mut form = UrlForm::new();
    form.generate_article = !args.no_article;
    form.generate_breadcrumb = !args.no_breadcrumb;
    form.generate_faq = !args.no_faq;
    if let Some(url) = &args.url {
        form.url = url.clone();
    }

    let mut code = ExitCode::SUCCESS;
    loop {
        if form.url.is_empty() {
            if args.interactive {
                eprint!("URL (blank line to quit): ");
            }
            if !form.paste_from_clipboard(&mut StdioClipboard) && args.interactive {
                break;
            }
        }

        let (outcome, results) = run_once(&args, &client, &session, &mut form).await?;
        code = outcome;
        if !args.interactive {
            break;
        }

        eprintln!("\n{}", render::PROCESS_ANOTHER);
        match results {
            Some(results) => results.process_another(&session),
            None => session.reset(),
        }
        form.url.clear();
    }

    if args.stats {
        session.stats().print_summary();
    }
    Ok(code)
}

async fn run_once(
    args: &Args,
    client: &HttpSchemaClient,
    session: &Session,
    form: &mut UrlForm,
) -> anyhow::Result<(ExitCode, Option<SchemaResults>)> {
    let Some(request) = form.submit() else {
        eprint!("{}", form.render(&session.state()));
        return Ok((ExitCode::from(2), None));
    };

    let spinner = render::loading::spinner(ProgressDrawTarget::stderr())?;
    let submitted = session.submit(client, &request).await;
    spinner.finish_and_clear();
    let state = submitted?;

    if let Some(toast) = Notification::for_state(&state) {
        eprintln!("{toast}");
    }

    let SubmissionState::Succeeded(data) = &state else {
        eprint!("{}", render::render_state(&state)?);
        return Ok((ExitCode::FAILURE, None));
    };

    let mut results = SchemaResults::new(data.schemas.clone());
    if let Some(kind) = args.tab {
        if !results.select(kind) {
            eprintln!("No {} schema was generated; showing the default tab", kind.label());
        }
    }

    if args.copy {
        if let Some(kind) = results.active() {
            let toast = results.copy(kind, args.minified, &mut StdioClipboard);
            eprintln!("{toast}");
        }
    } else {
        println!("{}", render::preview::render(&data.extracted_data));
        println!("{}", results.render()?);
    }

    if let Some(dir) = &args.download {
        let path = results.download_all(dir)?;
        eprintln!("Saved {}", path.display());
    }
    eprintln!("Test with Google: {}", render::RICH_RESULTS_TEST_URL);
    Ok((ExitCode::SUCCESS, Some(results)))
}
