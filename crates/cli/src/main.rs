use std::path::PathBuf;
use std::process;

use clap::Parser;

use audioscribe_core::audio::infrastructure::ffmpeg_audio_decoder::FfmpegAudioDecoder;
use audioscribe_core::pipeline::batch_executor::{BatchExecutor, WorkerFactory};
use audioscribe_core::pipeline::batch_logger::StdoutBatchLogger;
use audioscribe_core::pipeline::batch_transcribe_use_case::{
    default_worker_count, BatchTranscribeUseCase,
};
use audioscribe_core::pipeline::infrastructure::serial_batch_executor::SerialBatchExecutor;
use audioscribe_core::pipeline::infrastructure::threaded_batch_executor::ThreadedBatchExecutor;
use audioscribe_core::pipeline::transcribe_file_use_case::TranscribeFileUseCase;
use audioscribe_core::shared::constants::{WHISPER_MODEL_NAME, WHISPER_MODEL_URL};
use audioscribe_core::shared::model_resolver;
use audioscribe_core::transcription::infrastructure::text_transcript_writer::TextTranscriptWriter;
use audioscribe_core::transcription::infrastructure::whisper_recognizer::WhisperRecognizer;

/// Batch transcription of audio files to timestamped text.
///
/// Scans one directory (non-recursive) for mp3/wav/m4a files and writes a
/// `<name>_transcripts/transcript.txt` next to each. Files whose transcript
/// already exists are skipped, so an interrupted batch can simply be rerun.
#[derive(Parser)]
#[command(name = "audioscribe")]
struct Cli {
    /// Directory containing audio files.
    directory: PathBuf,

    /// Transcribe across a bounded pool of workers instead of sequentially.
    #[arg(long)]
    parallel: bool,

    /// Path to a local ggml Whisper model file (default: cached medium.en,
    /// downloaded on first use).
    #[arg(long)]
    model: Option<PathBuf>,

    /// Verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    validate(&cli)?;

    let model_path = resolve_model(&cli)?;

    let factory: WorkerFactory = Box::new(move || {
        let recognizer = WhisperRecognizer::new(&model_path).map_err(|e| e.to_string())?;
        Ok(TranscribeFileUseCase::new(
            Box::new(FfmpegAudioDecoder),
            Box::new(recognizer),
            Box::new(TextTranscriptWriter),
        ))
    });

    let executor: Box<dyn BatchExecutor> = if cli.parallel {
        Box::new(ThreadedBatchExecutor::new(default_worker_count()))
    } else {
        Box::new(SerialBatchExecutor)
    };

    let mut use_case =
        BatchTranscribeUseCase::new(executor, factory, Box::new(StdoutBatchLogger::new()));
    let report = use_case.execute(&cli.directory)?;

    log::info!(
        "Done: {} transcribed, {} skipped, {} failed of {} audio files",
        report.completed,
        report.skipped,
        report.failed,
        report.discovered
    );

    // Per-job failures are logged above; they do not change the exit code.
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.directory.is_dir() {
        return Err(format!("Not a directory: {}", cli.directory.display()).into());
    }
    Ok(())
}

fn resolve_model(cli: &Cli) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref model) = cli.model {
        if !model.exists() {
            return Err(format!("Model file not found: {}", model.display()).into());
        }
        return Ok(model.clone());
    }

    log::info!("Resolving model: {WHISPER_MODEL_NAME}");
    let path = model_resolver::resolve(
        WHISPER_MODEL_NAME,
        WHISPER_MODEL_URL,
        Some(Box::new(download_progress)),
    )?;
    eprintln!();
    Ok(path)
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading Whisper model... {pct}%");
    } else {
        eprint!("\rDownloading Whisper model... {downloaded} bytes");
    }
}
