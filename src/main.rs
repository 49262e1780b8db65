use std::io::{self, BufReader, BufWriter, Read, Stdout, Write};
use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use anyhow::Result;
use clap::{App, load_yaml, value_t};
use crossbeam_channel::{bounded, Sender, RecvTimeoutError};
use env_logger::Builder;
use log::{debug, error, info, warn};
use log::LevelFilter::*;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::flag::register;
use kflow::args::{input, opt, Format};
use kflow::clock::Reference;
use kflow::context::Context;
use kflow::decode::{self, RawFlowRecord, read_from};
use kflow::export::{Export, Stream};
use kflow::link::Interfaces;
use kflow::model::Record;

enum Output {
    Json(BufWriter<Stdout>),
    Pb(Export<Stream<BufWriter<Stdout>>>),
}

fn main() -> Result<()> {
    let yaml = load_yaml!("args.yml");
    let ver  = env!("CARGO_PKG_VERSION");
    let args = App::from_yaml(&yaml).version(ver).get_matches();

    let agent  = value_t!(args, "agent", IpAddr)?;
    let batch  = value_t!(args, "batch", usize)?;
    let format = opt(args.value_of("format"))?.unwrap_or(Format::Json);
    let source = input(args.value_of("input").unwrap_or("-"))?;

    let (module, level) = match args.occurrences_of("verbose") {
        0 => (Some(module_path!()), Info),
        1 => (Some(module_path!()), Debug),
        2 => (Some(module_path!()), Trace),
        _ => (None,                 Trace),
    };
    Builder::from_default_env().filter(module, level).init();

    info!("initializing kflow {}", ver);

    let shutdown = Arc::new(AtomicBool::new(false));
    register(SIGTERM, shutdown.clone())?;
    register(SIGINT,  shutdown.clone())?;

    let ctx = Context::new(agent, Interfaces::load());

    let stdout     = BufWriter::new(io::stdout());
    let mut output = match format {
        Format::Json => Output::Json(stdout),
        Format::Pb   => Output::Pb(Export::new(Stream::new(stdout), batch)),
    };

    let (tx, rx) = bounded(1_000);

    thread::spawn(move || match read(source, tx) {
        Ok(n)  => debug!("read {} records", n),
        Err(e) => error!("reader failed: {}", e),
    });

    let timeout = Duration::from_millis(100);

    while !shutdown.load(Ordering::Acquire) {
        let raw: RawFlowRecord = match rx.recv_timeout(timeout) {
            Ok(raw)                             => raw,
            Err(RecvTimeoutError::Timeout)      => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        let now    = Reference::now()?;
        let record = Record::new(&ctx, raw.id, raw.metrics.into(), &now);

        match &mut output {
            Output::Json(w)    => {
                serde_json::to_writer(&mut *w, &record)?;
                w.write_all(b"\n")?;
            },
            Output::Pb(export) => export.export(&record),
        }
    }

    match output {
        Output::Json(mut w) => w.flush()?,
        Output::Pb(export)  => export.into_inner().into_inner().flush()?,
    }

    Ok(())
}

fn read(source: Box<dyn Read + Send>, tx: Sender<RawFlowRecord>) -> Result<u64> {
    let mut source = BufReader::new(source);
    let mut count  = 0;

    loop {
        match read_from::<RawFlowRecord, _>(&mut source) {
            Ok(raw)                   => tx.send(raw)?,
            Err(decode::Error::Eof)   => return Ok(count),
            Err(decode::Error::Io(e)) => return Err(e.into()),
            Err(e)                    => {
                warn!("dropping record: {}", e);
                continue;
            },
        }
        count += 1;
    }
}
