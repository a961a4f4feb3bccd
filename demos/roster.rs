//! Builds a roster of names from both ends, prints it, then sums a list of integers.
//!
//! `RUST_LOG=ringlist=trace cargo run --example roster` shows the list's own events.

use ringlist::RingList;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(std::io::stderr)
		.init();

	let mut names = RingList::new();
	names.push_front("Tachibana Arisu");
	names.push_back("Satou Shin");
	names.push_front("Katagiri Sanae");
	names.push_back("Sasaki Chie");
	names.push_front("Tsukioka Kogane");
	names.push_back("Komiya Kaho");

	info!(len = names.len(), "built roster");
	println!("{}", names.len());

	for name in &names {
		println!("{name}");
	}

	println!("\n");

	if let (Some(front), Some(back)) = (names.front(), names.back()) {
		println!("{front}");
		println!("{back}");
	}

	let numbers = [17, 23, 78, 4, 34, 19, 3, 5, 23, 37, 43].into_iter()
		.fold(RingList::new(), |mut list, n| { list.push_back(n); list });

	let sum = numbers.iter().fold(0, |acc, n| acc + n);
	info!(len = numbers.len(), sum, "summed numbers");
	println!("{sum}");
}
