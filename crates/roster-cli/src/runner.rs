use crate::{Cli, CliError, CliResult, Commands};

use roster_client::connect;
use roster_config::Config;
use roster_core::{Record, RecordFields, RecordId};
use roster_state::RecordListModel;

use log::debug;
use serde_json::{Value, json};

/// Load config, apply command-line overrides, validate.
pub fn load_config(cli: &Cli) -> CliResult<Config> {
    let mut config = Config::load()?;

    if let Some(ref server) = cli.server {
        config.api.base_url = server.clone();
    }
    if let Some(ref backend) = cli.backend {
        config.api.backend = backend.parse()?;
    }
    if let Some(ref collection) = cli.collection {
        config.api.collection = collection.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Connect the configured store and wrap it in a model whose changes are logged.
pub fn build_model(config: &Config) -> CliResult<RecordListModel> {
    let store = connect(&config.api)?;
    let mut model = RecordListModel::new(store);

    model.subscribe(|change| {
        debug!(
            "{:?}: {} records{}",
            change.kind,
            change.records.len(),
            if change.loading { " (loading)" } else { "" }
        );
    });

    Ok(model)
}

/// Run one command against the model and return what should be printed.
pub async fn execute(command: &Commands, model: &mut RecordListModel) -> CliResult<Value> {
    match command {
        Commands::List => {
            refresh(model).await?;
            Ok(serde_json::to_value(model.records())?)
        }
        Commands::Get { id } => {
            refresh(model).await?;
            let record = model
                .find(&RecordId::from(id.as_str()))
                .ok_or_else(|| CliError::not_found(id.as_str()))?;
            Ok(record.to_payload())
        }
        Commands::Create { fields } => {
            let fields = RecordFields::from(fields);
            fields.validate()?;
            let record = model.add(&fields).await?;
            Ok(record.to_payload())
        }
        Commands::Update { id, fields } => {
            let fields = RecordFields::from(fields);
            fields.validate()?;
            let record = Record::new(RecordId::from(id.as_str()), fields);
            let payload = record.to_payload();
            model.modify(record).await?;
            Ok(payload)
        }
        Commands::Delete { id } => {
            model.remove(&RecordId::from(id.as_str())).await?;
            Ok(json!({ "deleted_id": id }))
        }
    }
}

/// The model swallows refresh failures; a command that needs the list cannot.
async fn refresh(model: &mut RecordListModel) -> CliResult<()> {
    model.refresh().await;
    match model.last_error() {
        Some(message) => Err(CliError::refresh(message)),
        None => Ok(()),
    }
}
