use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use karuta_catalog::{Card, PLACEHOLDER_IMAGE};
use karuta_import::*;
use karuta_lookup::{ImageCandidate, ImageLookup, LookupError};
use tokio::time::Duration;

#[derive(Clone)]
enum Reply {
    Found(&'static str),
    Empty,
    Fail,
    Hang,
}

/// Canned lookup that also tracks how many searches run at once.
struct FakeLookup {
    replies: HashMap<&'static str, Reply>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    queries: Mutex<Vec<(String, Option<String>)>>,
}

impl FakeLookup {
    fn new(replies: &[(&'static str, Reply)]) -> Self {
        Self {
            replies: replies.iter().cloned().collect(),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }
}

impl ImageLookup for FakeLookup {
    async fn search(
        &self,
        name: &str,
        series: Option<&str>,
    ) -> Result<Vec<ImageCandidate>, LookupError> {
        self.queries
            .lock()
            .unwrap()
            .push((name.to_string(), series.map(str::to_string)));
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(10)).await;

        let reply = self.replies.get(name).cloned().unwrap_or(Reply::Empty);
        if let Reply::Hang = reply {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match reply {
            Reply::Found(url) => Ok(vec![
                ImageCandidate {
                    image_url: url.to_string(),
                    display_name: name.to_string(),
                    favorites: 10,
                },
                ImageCandidate {
                    image_url: "second-choice".to_string(),
                    display_name: name.to_string(),
                    favorites: 1,
                },
            ]),
            Reply::Empty => Ok(Vec::new()),
            Reply::Fail => Err(LookupError::RateLimit),
            Reply::Hang => Ok(Vec::new()),
        }
    }
}

fn named(names: &[&str]) -> Vec<Card> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Card::new(&format!("c{i:03}"), name, "Series"))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn each_failure_mode_gets_a_placeholder() {
    let lookup = FakeLookup::new(&[
        ("Rem", Reply::Found("https://cdn.example/rem.jpg")),
        ("Ram", Reply::Empty),
        ("Emilia", Reply::Fail),
        ("Puck", Reply::Hang),
    ]);
    let mut collection = named(&["Rem", "Ram", "Emilia", "Puck"]);
    let targets = collection.clone();
    let options = BackfillOptions {
        concurrency: 5,
        timeout: Duration::from_secs(5),
    };

    let stats = backfill_images(&lookup, &mut collection, &targets, &options, &SilentProgress).await;

    assert_eq!(stats, BackfillStats { resolved: 1, placeholders: 3 });
    assert_eq!(collection[0].image_url, "https://cdn.example/rem.jpg");
    for card in &collection[1..] {
        assert_eq!(card.image_url, PLACEHOLDER_IMAGE, "{}", card.name);
    }
}

#[tokio::test(start_paused = true)]
async fn concurrency_is_bounded() {
    let names: Vec<String> = (0..12).map(|i| format!("Name {i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let lookup = FakeLookup::new(&[]);
    let mut collection = named(&refs);
    let targets = collection.clone();

    let options = BackfillOptions {
        concurrency: 3,
        ..BackfillOptions::default()
    };
    let stats = backfill_images(&lookup, &mut collection, &targets, &options, &SilentProgress).await;

    assert_eq!(stats.placeholders, 12);
    assert_eq!(lookup.peak.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn only_cards_needing_images_are_looked_up() {
    let lookup = FakeLookup::new(&[("Rem", Reply::Found("new"))]);
    let mut collection = named(&["Rem", "Ram", "Emilia"]);
    collection[1].image_url = "https://cdn.example/ram.jpg".into();
    collection[2].image_url = PLACEHOLDER_IMAGE.into();
    let targets = collection.clone();

    backfill_images(&lookup, &mut collection, &targets, &BackfillOptions::default(), &SilentProgress)
        .await;

    let queried: Vec<String> = lookup.queries.lock().unwrap().iter().map(|(n, _)| n.clone()).collect();
    assert_eq!(queried.len(), 2);
    assert!(!queried.contains(&"Ram".to_string()));
    assert_eq!(collection[0].image_url, "new");
    assert_eq!(collection[1].image_url, "https://cdn.example/ram.jpg");
}

#[tokio::test(start_paused = true)]
async fn series_is_passed_along() {
    let lookup = FakeLookup::new(&[]);
    let mut collection = named(&["Rem"]);
    let targets = collection.clone();
    backfill_images(&lookup, &mut collection, &targets, &BackfillOptions::default(), &SilentProgress)
        .await;
    assert_eq!(
        *lookup.queries.lock().unwrap(),
        [("Rem".to_string(), Some("Series".to_string()))]
    );
}

#[tokio::test]
async fn nothing_to_do() {
    let lookup = FakeLookup::new(&[]);
    let mut collection: Vec<Card> = Vec::new();
    let stats = backfill_images(&lookup, &mut collection, &[], &BackfillOptions::default(), &SilentProgress)
        .await;
    assert_eq!(stats, BackfillStats::default());
}
