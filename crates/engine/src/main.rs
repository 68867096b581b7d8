//! modelgraph - build and validate a content-type model graph from a snapshot.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use modelgraph_engine::infrastructure::settings::{
    load_dotenv_from_repo_root, BuildScope, EngineSettings,
};
use modelgraph_engine::infrastructure::snapshot::JsonSnapshot;
use modelgraph_engine::{output, App};

/// Exit status when the definitions use an alias twice.
const ALIAS_CONFLICT_EXIT: i32 = 2;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging; stdout is reserved for the rendered graph.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modelgraph_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut settings = EngineSettings::from_env()?;
    if let Some(path) = std::env::args().nth(1) {
        settings = settings.with_snapshot_path(path);
    }

    tracing::info!(
        snapshot = %settings.snapshot_path.display(),
        scope = %settings.scope,
        output = %settings.output,
        "Building type models"
    );

    let snapshot = JsonSnapshot::load(&settings.snapshot_path)?;
    let app = App::from_snapshot(snapshot);
    let ops = &app.use_cases.type_models.ops;

    let result = match settings.scope {
        BuildScope::All => ops.all_types(),
        BuildScope::Kind(kind) => ops.types_of(kind),
    };

    let set = match result {
        Ok(set) => set,
        Err(err) => {
            if let Some(conflict) = err.alias_conflict() {
                eprintln!("{}", conflict);
                std::process::exit(ALIAS_CONFLICT_EXIT);
            }
            return Err(err.into());
        }
    };

    print!("{}", output::render(&set, settings.output)?);
    tracing::info!(types = set.len(), "Type model graph built");
    Ok(())
}
