use crate::reports;
use clap::Args;
use discomarkov::clips;
use discomarkov::config::{GenerateParams, OutputFormat};
use discomarkov::error::MkResult;
use discomarkov::model::{FilterSet, ModelBuilder};
use discomarkov::{output, store};
use std::path::Path;
use tracing::info;

pub const MODELS_FILE: &str = "models.json";

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub params: GenerateParams,
}

pub fn run(args: GenerateArgs) -> MkResult<()> {
    let params = args.params;
    info!(
        "🔧 Generating models from {} to {}...",
        params.input, params.output
    );
    info!("Filters: {:?}", params.filters);

    // Bad filters or sizes abort before any user is touched.
    let filters = FilterSet::parse(&params.filters)?;
    let window_sizes = params.get_window_sizes()?;

    let users = store::load_users(&params.input)?;
    let builder = ModelBuilder::new(filters, window_sizes);
    let outcome = builder.build_all(&users)?;

    if params.report {
        reports::print_model_report(&outcome.models, builder.window_sizes());
    }

    match params.format {
        OutputFormat::Clips => {
            let rendered = clips::render_all(&outcome.models)?;
            let templates = clips::render_templates(builder.window_sizes())?;
            output::write_templates(&templates, &params.output)?;
            output::write_fact_files(&rendered, &params.output)?;
        }
        OutputFormat::Json => {
            std::fs::create_dir_all(&params.output)?;
            let path = Path::new(&params.output).join(MODELS_FILE);
            store::save_models(&outcome.models, path)?;
        }
    }

    info!(
        "Generated {} models to {} as {}",
        outcome.processed, params.output, params.format
    );
    Ok(())
}
