use clap::Parser;
use claritycare_cli::assets::AssetResolver;
use claritycare_cli::cli::{Cli, Commands};
use claritycare_cli::render::{self, RenderOptions};
use claritycare_cli::store::TopicStore;
use claritycare_scanner::{SafetyScanner, ScanPolicy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = TopicStore::load(&cli.topics)?;
    let assets = AssetResolver::new(&cli.assets);

    match cli.command {
        Commands::List { category, search } => {
            let filtered = store.filter(&category, &search);
            render::render_topic_list(&filtered);
        }

        Commands::Show {
            title,
            no_eli5,
            extra_detail,
            dev_warnings,
        } => {
            let topic = store
                .find(&title)
                .ok_or_else(|| anyhow::anyhow!("no topic titled \"{}\"", title))?;

            let warnings = if dev_warnings {
                Some(SafetyScanner::new()?.scan(topic))
            } else {
                None
            };

            render::render_topic(
                topic,
                &assets,
                warnings.as_deref(),
                RenderOptions {
                    eli5: !no_eli5,
                    extra_detail,
                },
            );
        }

        Commands::Lint { topic, policy } => {
            let policy = match policy {
                Some(path) => ScanPolicy::from_file(path)?,
                None => ScanPolicy::default(),
            };
            let scanner = SafetyScanner::with_policy(policy)?;

            let targets: Vec<_> = match &topic {
                Some(title) => {
                    let found = store
                        .find(title)
                        .ok_or_else(|| anyhow::anyhow!("no topic titled \"{}\"", title))?;
                    vec![found]
                }
                None => store.topics().iter().collect(),
            };

            let mut total = 0usize;
            for target in &targets {
                let warnings = scanner.scan(target);
                if warnings.is_empty() {
                    continue;
                }

                println!("{}:", target.title());
                for warning in &warnings {
                    println!("- {}", warning);
                }
                println!();
                total += warnings.len();
            }

            if total == 0 {
                println!(
                    "No safety/style warnings detected across {} topics.",
                    targets.len()
                );
            } else {
                println!("{} warnings across {} topics.", total, targets.len());
            }
            // Advisory only: findings never fail the run.
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "claritycare_cli=debug,claritycare_scanner=debug"
    } else {
        "claritycare_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
