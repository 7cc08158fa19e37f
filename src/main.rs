use dep_slim::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
use dep_slim::adapters::outbound::filesystem::FileSystemReader;
use dep_slim::application::dto::{CheckRequest, CheckResponse};
use dep_slim::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_slim::application::use_cases::CheckRedundancyUseCase;
use dep_slim::cli::Args;
use dep_slim::config::{self, Settings};
use dep_slim::ports::outbound::ProgressReporter;
use dep_slim::shared::error::{DepSlimError, ExitCode, INPUT_REQUIRED_MESSAGE};
use dep_slim::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            report_error(&e);
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn report_error(e: &anyhow::Error) {
    let is_input_error = e
        .downcast_ref::<DepSlimError>()
        .is_some_and(DepSlimError::is_input_error);
    if is_input_error {
        eprintln!("{}", INPUT_REQUIRED_MESSAGE);
    }

    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    // Display error chain
    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
}

async fn run(args: Args) -> Result<ExitCode> {
    // Validate project directory
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    // Load config: explicit path or auto-discovery
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&project_path)?,
    };
    let settings = config::merge_settings(&args, config_file)?;

    let response = if args.quiet {
        check(&project_path, &settings, QuietProgressReporter).await?
    } else {
        check(&project_path, &settings, StderrProgressReporter::new()).await?
    };

    let presenter_type = PresenterType::from_output(args.output);
    let color = settings.color
        && presenter_type.supports_color()
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let formatter = FormatterFactory::create(settings.format, color);
    let formatted_output = formatter.format(&response.report)?;

    PresenterFactory::create(presenter_type).present(&formatted_output)?;

    Ok(response.exit_code())
}

async fn check<PR: ProgressReporter>(
    project_path: &Path,
    settings: &Settings,
    progress_reporter: PR,
) -> Result<CheckResponse> {
    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::with_file_names(&settings.lockfile, &settings.manifest);

    let use_case = CheckRedundancyUseCase::new(reader.clone(), reader, progress_reporter);

    let request =
        CheckRequest::new(project_path.to_path_buf()).with_dep_filters(settings.dep_filters.clone());

    use_case.execute(request).await
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DepSlimError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| DepSlimError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(DepSlimError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. Symbolic links are not allowed."
                .to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(DepSlimError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err_string = format!("{}", validate_project_path(&nonexistent_path).unwrap_err());
        assert!(err_string.contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.json");
        fs::write(&file_path, "{}").unwrap();

        let err_string = format!("{}", validate_project_path(&file_path).unwrap_err());
        assert!(err_string.contains("Not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_project_path_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real");
        let link = temp_dir.path().join("link");
        fs::create_dir(&real).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let err_string = format!("{}", validate_project_path(&link).unwrap_err());
        assert!(err_string.contains("symbolic link"));
    }

    #[test]
    fn test_invalid_project_path_is_not_an_input_error() {
        let e: anyhow::Error = DepSlimError::InvalidProjectPath {
            path: PathBuf::from("x"),
            reason: "Not a directory".to_string(),
        }
        .into();
        assert!(!e
            .downcast_ref::<DepSlimError>()
            .is_some_and(DepSlimError::is_input_error));
    }
}
