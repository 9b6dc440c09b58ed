use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, post, put, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use logos_core::analysis::{Analysis, AnalysisInput};
use logos_core::io::{get_filename, list_files};
use logos_core::model::construct_markov_matrix;
use logos_core::text::{TextBody, WordList};
use logos_core::Error;

/// Server settings, read from the environment.
///
/// - `LOGOS_HOST` (default `127.0.0.1`)
/// - `LOGOS_PORT` (default `5000`)
/// - `LOGOS_DATA`: folder of `.txt` publications (default `./data`)
struct ServerConfig {
	host: String,
	port: u16,
	data_folder: PathBuf,
}

impl ServerConfig {
	fn from_env() -> Result<Self, String> {
		let port: u16 = match env::var("LOGOS_PORT") {
			Ok(port) => port.parse().map_err(|_| format!("Invalid LOGOS_PORT: {port}"))?,
			Err(_) => 5000,
		};
		Ok(Self {
			host: env::var("LOGOS_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned()),
			port,
			data_folder: PathBuf::from(env::var("LOGOS_DATA").unwrap_or_else(|_| "./data".to_owned())),
		})
	}
}

/// Query parameters of the `/v1/analyze` endpoints.
#[derive(Deserialize)]
struct AnalyzeParams {
	name: Option<String>,
	ngram_size: Option<usize>,
	threshold: Option<usize>,
}

/// Query parameters of `/v1/markov`.
#[derive(Deserialize)]
struct MarkovParams {
	n: Option<usize>,
}

#[derive(Deserialize)]
struct WordListQuery {
	words: Option<String>,
}

struct SharedData {
	data_folder: PathBuf,
	keywords: WordList,
}

impl AnalyzeParams {
	/// Builds the analysis input from the query and the shared keyword list.
	fn analysis_input(&self, keywords: &WordList) -> Result<AnalysisInput, Error> {
		let mut input = AnalysisInput::default();
		if let Some(n) = self.ngram_size {
			input.set_ngram_size(n)?;
		}
		if let Some(threshold) = self.threshold {
			input.long_word_threshold = threshold;
		}
		input.keywords = keywords.clone();
		Ok(input)
	}
}

fn analyze(body: &mut TextBody, input: &AnalysisInput) -> HttpResponse {
	match Analysis::run(body, input) {
		Ok(analysis) => HttpResponse::Ok().json(analysis),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/publications`
///
/// Lists the publications available in the data folder (names without extension).
#[get("/v1/publications")]
async fn get_publications(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let folder = match data.lock() {
		Ok(shared_data) => shared_data.data_folder.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Shared data lock failed"),
	};

	match list_files(&folder, "txt") {
		Ok(files) => {
			let names: Vec<String> = files.iter().filter_map(|file| get_filename(file).ok()).collect();
			HttpResponse::Ok().body(names.join("\n"))
		}
		Err(e) => {
			log::warn!("Failed to list {}: {}", folder.display(), e);
			HttpResponse::InternalServerError().body("Failed to list publications")
		}
	}
}

/// HTTP GET endpoint `/v1/analyze`
///
/// Analyzes `<data folder>/<name>.txt` with the shared keyword list.
#[get("/v1/analyze")]
async fn get_analysis(data: web::Data<Mutex<SharedData>>, query: web::Query<AnalyzeParams>) -> impl Responder {
	let name = match &query.name {
		Some(s) if !s.trim().is_empty() && !s.contains(['/', '\\']) => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or invalid publication name"),
	};

	let (path, input) = {
		let shared_data = match data.lock() {
			Ok(m) => m,
			Err(_) => return HttpResponse::InternalServerError().body("Shared data lock failed"),
		};
		let input = match query.analysis_input(&shared_data.keywords) {
			Ok(input) => input,
			Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
		};
		(shared_data.data_folder.join(format!("{name}.txt")), input)
	};

	let mut body = match TextBody::from_file(&path) {
		Ok(body) => body,
		Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
			return HttpResponse::NotFound().body(format!("Publication {name} not found"));
		}
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to read publication: {e}")),
	};

	log::info!("Analyzing {}", path.display());
	analyze(&mut body, &input)
}

/// HTTP POST endpoint `/v1/analyze`
///
/// Analyzes the request body text with the shared keyword list.
#[post("/v1/analyze")]
async fn post_analysis(data: web::Data<Mutex<SharedData>>, query: web::Query<AnalyzeParams>, text: String) -> impl Responder {
	let input = {
		let shared_data = match data.lock() {
			Ok(m) => m,
			Err(_) => return HttpResponse::InternalServerError().body("Shared data lock failed"),
		};
		match query.analysis_input(&shared_data.keywords) {
			Ok(input) => input,
			Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
		}
	};

	analyze(&mut TextBody::from_text(&text), &input)
}

/// HTTP POST endpoint `/v1/markov`
///
/// Returns the normalized Markov matrix of the request body text as
/// nested maps of encoded n-grams.
#[post("/v1/markov")]
async fn post_markov(query: web::Query<MarkovParams>, text: String) -> impl Responder {
	let n = query.n.unwrap_or(1);
	match construct_markov_matrix(&mut TextBody::from_text(&text), n) {
		Ok(matrix) => HttpResponse::Ok().json(matrix),
		Err(e @ Error::InvalidNGramSize(_)) => HttpResponse::BadRequest().body(e.to_string()),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP PUT endpoint `/v1/word_list`
///
/// Replaces the shared keyword list (`words=a,b,c`).
#[put("/v1/word_list")]
async fn put_word_list(data: web::Data<Mutex<SharedData>>, query: web::Query<WordListQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Shared data lock failed"),
	};

	shared_data.keywords = match &query.words {
		Some(words) => WordList::parse(words),
		None => WordList::default(),
	};

	log::info!("Keyword list replaced ({} words)", shared_data.keywords.len());
	HttpResponse::Ok().body(format!("{} keywords loaded", shared_data.keywords.len()))
}

/// Main entry point for the server.
///
/// Reads the configuration from the environment, initialises logging
/// (`RUST_LOG`) and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
	log::info!(
		"Serving publications from {} on {}:{}",
		config.data_folder.display(),
		config.host,
		config.port
	);

	let shared_data = SharedData {
		data_folder: config.data_folder,
		keywords: WordList::default(),
	};
	let shared_data = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.service(get_publications)
			.service(get_analysis)
			.service(post_analysis)
			.service(post_markov)
			.service(put_word_list)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
