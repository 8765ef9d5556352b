//! pronostico interactive client
//!
//! Reads queries from stdin, sends each one over its own TCP connection,
//! and prints the decoded response. Typing `salir` (any case) ends the
//! session without touching the network.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use pronostico::format::{astro_text, hex_dump, weather_text};
use pronostico::protocol::{decode_response, encode_query, is_exit, Decoded, Query};
use pronostico::{Client, ClientConfig, PronosticoError, ServerKind, WireFormat};

/// pronostico CLI
#[derive(Parser, Debug)]
#[command(name = "pronostico")]
#[command(about = "Interactive client for the weather/horoscope servers")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(short = 'H', long, default_value = "localhost")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "24000")]
    port: u16,

    /// Server kind: primary, weather or horoscope
    #[arg(short, long, default_value = "primary")]
    kind: String,

    /// Wire format for date queries: binary or json
    #[arg(short, long, default_value = "binary")]
    format: String,

    /// Maximum response bytes captured per request
    #[arg(long, default_value = "1024")]
    recv_max: usize,

    /// Read timeout in milliseconds (0 disables)
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,pronostico=info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    // Unrecognized kind/format strings are fatal configuration errors
    let kind: ServerKind = match args.kind.parse() {
        Ok(k) => k,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let format: WireFormat = match args.format.parse() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let config = ClientConfig::builder()
        .host(&args.host)
        .port(args.port)
        .kind(kind)
        .format(format)
        .recv_max(args.recv_max)
        .read_timeout_ms(args.timeout_ms)
        .build();

    tracing::info!(
        "pronostico v{} -> {}:{} ({:?}, {:?})",
        pronostico::VERSION,
        config.host,
        config.port,
        config.kind,
        config.format
    );

    if let Err(e) = run(Client::new(config)) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Interactive request loop; returns on exit keyword or EOF
fn run(client: Client) -> pronostico::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Escribir mensaje: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        if is_exit(&line) {
            println!("Saliendo...");
            break;
        }

        // Per-request errors are reported and the session continues
        if let Err(e) = handle_request(&client, &line) {
            if e.is_fatal() {
                return Err(e);
            }
            eprintln!("Error: {e}");
        }
    }

    Ok(())
}

/// One full request/response cycle for a line of input
fn handle_request(client: &Client, line: &str) -> pronostico::Result<()> {
    let query = Query::parse(line);
    let payload = encode_query(&query, client.config().format)?;

    println!("Bytes enviados ({}):", payload.len());
    println!("{}", hex_dump(&payload));

    let response = client.request(&payload)?;

    println!("Bytes recibidos ({}):", response.len());
    println!("{}", hex_dump(&response));

    match decode_response(client.config().kind, client.config().format, &response) {
        Ok(Decoded::Raw(bytes)) => {
            println!("Respuesta: {}", String::from_utf8_lossy(&bytes));
        }
        Ok(Decoded::Weather(record)) => {
            println!("Clima: {}", weather_text(&record));
        }
        Ok(Decoded::Astro(record)) => {
            println!("Horoscopo: {}", astro_text(&record));
        }
        // Show nothing but the reported reason; the dump above already
        // exposes whatever the server actually sent
        Err(e @ PronosticoError::InsufficientData { .. })
        | Err(e @ PronosticoError::InvalidData(_))
        | Err(e @ PronosticoError::Json(_)) => {
            eprintln!("Sin registro: {e}");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
