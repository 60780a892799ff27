// src/collect.rs
//
// Collector stage: load the listing page, wait for it to be rendered,
// read the cards, write the raw table.

use std::{
    thread,
    time::Instant,
};

use reqwest::blocking::Client;

use crate::{
    config::options::{CollectOptions, ReadinessOptions},
    core::net,
    error::{PipelineError, Result},
    model::RawListing,
    progress::Progress,
    specs::listing_page::{self, Markers},
    table,
};

/// Something that can load a URL and hand back the markup as rendered.
/// Implemented over HTTP here; tests and other drivers can plug in.
pub trait PageSource {
    fn load(&mut self, url: &str) -> Result<String>;
}

pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new() -> Result<Self> {
        Ok(Self { client: net::build_client()? })
    }
}

impl PageSource for HttpPageSource {
    fn load(&mut self, url: &str) -> Result<String> {
        net::http_get(&self.client, url)
    }
}

/// Outcome of the readiness wait.
#[derive(Debug)]
pub struct Ready {
    pub doc: String,
    pub found: usize,
    pub attempts: usize,
    /// Deadline passed before `min_items` cards appeared.
    pub timed_out: bool,
}

/// Reload until at least `min_items` cards are present or the timeout is
/// reached. The last markup is returned either way.
pub fn wait_until_ready(
    source: &mut dyn PageSource,
    url: &str,
    readiness: &ReadinessOptions,
    markers: &Markers<'_>,
    progress: &mut dyn Progress,
) -> Result<Ready> {
    let deadline = Instant::now() + readiness.timeout;
    let mut attempts = 0usize;

    loop {
        attempts += 1;
        let doc = source.load(url)?;
        let found = listing_page::count_cards(&doc, markers);
        progress.poll(attempts, found);
        logd!("Collect: poll {attempts} found {found} card(s)");

        if found >= readiness.min_items {
            return Ok(Ready { doc, found, attempts, timed_out: false });
        }
        if Instant::now() + readiness.poll_interval >= deadline {
            logw!("Collect: page not ready after {attempts} poll(s), continuing with {found} card(s)");
            return Ok(Ready { doc, found, attempts, timed_out: true });
        }
        thread::sleep(readiness.poll_interval);
    }
}

/// Load, wait, extract. Zero readable cards is an error: there is nothing
/// worth writing.
pub fn collect(
    opts: &CollectOptions,
    source: &mut dyn PageSource,
    markers: &Markers<'_>,
    progress: &mut dyn Progress,
) -> Result<Vec<RawListing>> {
    progress.log(&format!("Loading {}", opts.url));
    logf!("Collect: begin url={}", opts.url);

    let ready = wait_until_ready(source, &opts.url, &opts.readiness, markers, progress)?;
    if ready.timed_out {
        progress.warn(&format!(
            "page did not show {} listing(s) within {:?}",
            opts.readiness.min_items, opts.readiness.timeout
        ));
    }

    let rows = listing_page::parse_doc(&ready.doc, markers);
    progress.log(&format!("Found {} card(s), {} with a title.", ready.found, rows.len()));
    if rows.is_empty() {
        loge!("Collect: no listings in page ({} bytes)", ready.doc.len());
        return Err(PipelineError::NoListings);
    }
    progress.begin(rows.len());
    Ok(rows)
}

/// Whole collector stage. Returns the number of rows written.
pub fn run(
    opts: &CollectOptions,
    source: &mut dyn PageSource,
    progress: &mut dyn Progress,
) -> Result<usize> {
    let markers = Markers::default();
    let rows = match collect(opts, source, &markers, progress) {
        Ok(rows) => rows,
        Err(e) => {
            progress.finish();
            return Err(e);
        }
    };
    table::write_rows(&opts.out_path, &rows)?;
    logf!("Collect: wrote {} rows → {}", rows.len(), opts.out_path.display());
    progress.log(&format!("Saved {} listing(s) to '{}'.", rows.len(), opts.out_path.display()));
    progress.finish();
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;
    use std::time::Duration;

    /// Serves the given documents in order, then repeats the last one.
    struct Scripted {
        docs: Vec<String>,
        served: usize,
    }

    impl PageSource for Scripted {
        fn load(&mut self, _url: &str) -> Result<String> {
            let i = self.served.min(self.docs.len() - 1);
            self.served += 1;
            Ok(self.docs[i].clone())
        }
    }

    struct Broken;
    impl PageSource for Broken {
        fn load(&mut self, _url: &str) -> Result<String> {
            Err(PipelineError::Collection(s!("session closed")))
        }
    }

    fn rendered() -> String {
        let m = Markers::default();
        format!(
            r#"<ul><li class="{}"><h3 class="{}">Asus X 16GB 512GB SSD</h3><div class="{}">10.000,00 TL</div></li></ul>"#,
            m.card, m.title, m.price
        )
    }

    fn fast(timeout_ms: u64) -> ReadinessOptions {
        ReadinessOptions {
            min_items: 1,
            timeout: Duration::from_millis(timeout_ms),
            poll_interval: Duration::ZERO,
        }
    }

    #[test]
    fn polls_until_cards_render() {
        let mut src = Scripted { docs: vec![s!("<html/>"), s!("<html/>"), rendered()], served: 0 };
        let ready = wait_until_ready(&mut src, "u", &fast(10_000), &Markers::default(), &mut NullProgress).unwrap();
        assert_eq!(ready.attempts, 3);
        assert_eq!(ready.found, 1);
        assert!(!ready.timed_out);
    }

    #[test]
    fn gives_up_at_deadline() {
        let mut src = Scripted { docs: vec![s!("<html/>")], served: 0 };
        let ready = wait_until_ready(&mut src, "u", &fast(0), &Markers::default(), &mut NullProgress).unwrap();
        assert!(ready.timed_out);
        assert_eq!(ready.attempts, 1);
    }

    #[test]
    fn empty_page_is_no_listings() {
        let opts = CollectOptions { readiness: fast(0), ..CollectOptions::default() };
        let mut src = Scripted { docs: vec![s!("<html/>")], served: 0 };
        let err = collect(&opts, &mut src, &Markers::default(), &mut NullProgress).unwrap_err();
        assert!(matches!(err, PipelineError::NoListings));
    }

    #[test]
    fn source_failure_propagates() {
        let opts = CollectOptions { readiness: fast(0), ..CollectOptions::default() };
        let err = collect(&opts, &mut Broken, &Markers::default(), &mut NullProgress).unwrap_err();
        assert!(matches!(err, PipelineError::Collection(_)));
    }

    #[test]
    fn collects_rendered_rows() {
        let opts = CollectOptions { readiness: fast(1_000), ..CollectOptions::default() };
        let mut src = Scripted { docs: vec![rendered()], served: 0 };
        let rows = collect(&opts, &mut src, &Markers::default(), &mut NullProgress).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].price_raw, "10.000,00 TL");
        assert_eq!(rows[0].review_count_raw, "0");
    }
}
