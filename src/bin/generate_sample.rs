//! Writes a synthetic `nepal-trek-data.csv` shaped like the scraped original:
//! a pandas index column, prices with currency noise, altitudes and
//! durations wrapped in prose, and many spellings of each category.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xorshift64*).
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }

    /// Uniform in `[-spread, spread]`.
    fn jitter(&mut self, spread: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        (unit * 2.0 - 1.0) * spread
    }
}

/// (name, max altitude m, days, base cost USD, grade family, lodging family)
const ROUTES: &[(&str, u32, u32, u32, usize, usize)] = &[
    ("Everest Base Camp Trek", 5364, 14, 1400, 2, 1),
    ("Annapurna Circuit Trek", 5416, 16, 1250, 3, 1),
    ("Ghorepani Poon Hill Trek", 3210, 5, 600, 1, 0),
    ("Langtang Valley Trek", 4984, 8, 800, 2, 1),
    ("Manaslu Circuit Trek", 5106, 16, 2100, 3, 3),
    ("Mardi Himal Trek", 4500, 7, 650, 2, 4),
    ("Upper Mustang Trek", 3840, 14, 2600, 2, 0),
    ("Gokyo Lakes Trek", 5357, 13, 1350, 3, 1),
    ("Three Passes Trek", 5535, 20, 1900, 4, 4),
    ("Kanchenjunga Base Camp Trek", 5143, 24, 3200, 4, 3),
    ("Helambu Trek", 3640, 7, 550, 0, 0),
    ("Everest View Trek", 3880, 9, 1600, 0, 2),
    ("Annapurna Base Camp Trek", 4130, 11, 950, 2, 1),
    ("Tsum Valley Trek", 5093, 19, 2300, 3, 3),
    ("Makalu Base Camp Trek", 5000, 20, 2800, 4, 4),
    ("Dhampus Sarangkot Trek", 1650, 3, 350, 0, 0),
];

/// Spellings per grade family. A few fall outside the lookup table on purpose.
const GRADE_SPELLINGS: &[&[&str]] = &[
    &["Light", "Light+Moderate"],
    &["Easy", "Easy To Moderate", "Easy-Moderate"],
    &["Moderate", "Moderate+Demanding", "Moderate-Hard"],
    &["Strenuous"],
    &["Demanding", "Demanding+Challenging", "Challenging"],
];

const LODGING_SPELLINGS: &[&[&str]] = &[
    &["Hotel/Guesthouse", "Hotel/Guest Houses", "Hotel/Guesthouses"],
    &["Hotel/Teahouse", "Hotel/Teahouses"],
    &["Hotel/Luxury Lodges"],
    &["Hotel/Lodges", "Camping"],
    &["Teahouses/Lodges"],
];

fn messy_cost(rng: &mut SimpleRng, usd: u32) -> String {
    let thousands = if usd >= 1000 {
        format!("{},{:03}", usd / 1000, usd % 1000)
    } else {
        usd.to_string()
    };
    match rng.below(6) {
        0 => format!("USD {thousands}\n"),
        1 => format!("${thousands}"),
        2 => format!("USD\n{thousands}"),
        3 => format!(" {thousands} "),
        4 => "On request".to_string(),
        _ => format!("USD {usd}"),
    }
}

fn messy_altitude(rng: &mut SimpleRng, metres: u32) -> String {
    match rng.below(4) {
        0 => format!("Max {metres}m"),
        1 => format!("{metres} m"),
        2 => format!("{metres}m ({} ft)", metres * 328 / 100),
        _ => metres.to_string(),
    }
}

fn messy_days(rng: &mut SimpleRng, days: u32) -> String {
    match rng.below(3) {
        0 => format!("{days} Days"),
        1 => format!("{days}-{} days", days + 2),
        _ => format!("{days} Days {} Nights", days.saturating_sub(1)),
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "nepal-trek-data.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record([
        "",
        "Trek",
        "Cost (USD)",
        "Time",
        "Trip Grade",
        "Max Altitude",
        "Accomodation",
        "Best Travel Time",
    ])?;

    let seasons = ["March - May & Sept - Dec", "Sept - Nov", "All year"];
    let mut row_id = 0usize;

    // Each route appears a few times, as if scraped from several agencies.
    for _ in 0..4 {
        for &(name, altitude, days, cost, grade, lodging) in ROUTES {
            let cost = (cost as f64 + rng.jitter(cost as f64 * 0.15)).round() as u32;
            let days = (days as i64 + rng.jitter(2.0).round() as i64).max(1) as u32;

            writer.write_record([
                row_id.to_string(),
                name.to_string(),
                messy_cost(&mut rng, cost),
                messy_days(&mut rng, days),
                rng.pick(GRADE_SPELLINGS[grade]).to_string(),
                messy_altitude(&mut rng, altitude),
                rng.pick(LODGING_SPELLINGS[lodging]).to_string(),
                rng.pick(&seasons).to_string(),
            ])?;
            row_id += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {row_id} treks to {output_path}");
    Ok(())
}
