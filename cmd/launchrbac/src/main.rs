use clap::{Args, Parser, Subcommand, ValueEnum};
use pkg_constants::paths::DEFAULT_VALUES_FILE;
use pkg_rbac::{ReleaseContext, build_binding, render_json, render_yaml, resolve_binding};
use pkg_types::config::{ChartValues, load_config_file};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "launchrbac",
    about = "Render the pod-launcher RoleBinding for an Airflow release"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the RoleBinding / ClusterRoleBinding manifest
    Render {
        #[command(flatten)]
        input: BindingArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,
    },
    /// List the service accounts that would be bound
    Subjects {
        #[command(flatten)]
        input: BindingArgs,
    },
}

#[derive(Args)]
struct BindingArgs {
    /// Path to the chart values file
    #[arg(long, short = 'f', default_value = DEFAULT_VALUES_FILE)]
    values: String,

    /// Helm release name
    #[arg(long)]
    release_name: String,

    /// Release namespace
    #[arg(long, short)]
    namespace: String,

    /// Comma-separated executors, overrides `executor` from values
    #[arg(long)]
    executor: Option<String>,

    /// Bind cluster-wide instead of in the release namespace
    #[arg(long)]
    multi_namespace: bool,

    /// Bind the celery and kubernetes worker accounts instead of the shared one
    #[arg(long)]
    dedicated_worker_accounts: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

impl BindingArgs {
    /// Merge: CLI args > values file > defaults
    fn load(&self) -> anyhow::Result<(ChartValues, ReleaseContext)> {
        let mut values: ChartValues = load_config_file(&self.values)?;
        info!("Values file: {}", self.values);
        self.apply(&mut values);

        let ctx = ReleaseContext::from_values(&self.release_name, &self.namespace, &values);
        Ok((values, ctx))
    }

    /// Overlay the flags that were given on top of `values`.
    fn apply(&self, values: &mut ChartValues) {
        if let Some(executor) = &self.executor {
            values.executor = executor.clone();
        }
        if self.multi_namespace {
            values.multi_namespace_mode = true;
        }
        if self.dedicated_worker_accounts {
            values.workers.use_worker_dedicated_service_accounts = true;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Render { input, output } => {
            let (values, ctx) = input.load()?;
            info!("Executor:   {}", values.executor);
            info!("Release:    {}/{}", ctx.namespace, ctx.release_name);

            let Some(binding) = build_binding(&values, &ctx)? else {
                return Ok(());
            };
            let rendered = match output {
                OutputFormat::Yaml => render_yaml(&binding)?,
                OutputFormat::Json => render_json(&binding)?,
            };
            println!("{}", rendered.trim_end());
        }
        Commands::Subjects { input } => {
            let (values, ctx) = input.load()?;
            let Some(resolved) = resolve_binding(&values, &ctx)? else {
                println!("(binding disabled)");
                return Ok(());
            };

            println!("Binding kind: {}", resolved.scope.binding_kind());
            println!("{:<48} {}", "NAME", "NAMESPACE");
            for account in &resolved.accounts {
                println!("{:<48} {}", account.name, account.namespace);
            }

            if resolved.accounts.is_empty() {
                println!("(no subjects)");
            }
        }
    }

    Ok(())
}
