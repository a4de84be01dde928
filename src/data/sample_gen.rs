//! Deterministic synthetic history for offline use.
//!
//! Each series is a business-day walk through hand-picked historical anchor points,
//! interpolated in log or linear space, with seeded Gaussian noise smoothed by a
//! centred rolling mean. Same seed and end date, same output.

use anyhow::{Result, anyhow, bail};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::{Rng, SeedableRng, rngs::StdRng};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::domain::{Series, SeriesMap, TimePoint};
use crate::utils::{date_to_epoch_ms, interp_linear, parse_calendar_date, round_to, smooth_data};

const VALUE_PRECISION: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// Interpolate log(value); anchors must be positive
    Log,
    Linear,
}

#[derive(Debug, Clone, Copy)]
pub struct SeriesRecipe {
    pub anchors: &'static [(&'static str, f64)],
    pub seed: u64,
    /// Standard deviation of the per-day noise (fraction of value)
    pub noise: f64,
    /// Rolling-mean window applied to the noise
    pub smooth: usize,
    pub method: Interpolation,
}

impl SeriesRecipe {
    const fn log(anchors: &'static [(&'static str, f64)], seed: u64, noise: f64, smooth: usize) -> Self {
        Self {
            anchors,
            seed,
            noise,
            smooth,
            method: Interpolation::Log,
        }
    }

    const fn linear(mut self) -> Self {
        self.method = Interpolation::Linear;
        self
    }
}

const VIX_RECIPE: SeriesRecipe = SeriesRecipe::log(
    &[
        ("2000-01-03", 24.50),
        ("2002-07-24", 35.41),
        ("2008-11-20", 80.86),
        ("2010-05-21", 40.10),
        ("2011-08-08", 48.00),
        ("2015-08-24", 40.74),
        ("2018-02-05", 37.32),
        ("2020-03-16", 82.69),
        ("2022-10-12", 33.63),
        ("2024-12-31", 18.00),
    ],
    31,
    0.04,
    5,
);

pub const PRICE_RECIPES: &[(&str, SeriesRecipe)] = &[
    (
        "^GSPC",
        SeriesRecipe::log(
            &[
                ("2000-01-03", 1455.22),
                ("2002-10-09", 776.76),
                ("2007-10-09", 1565.15),
                ("2009-03-09", 676.53),
                ("2013-12-31", 1848.36),
                ("2016-12-30", 2238.83),
                ("2018-12-24", 2351.10),
                ("2020-03-23", 2237.40),
                ("2021-12-31", 4766.18),
                ("2022-10-12", 3577.03),
                ("2024-12-31", 4770.00),
            ],
            11,
            0.012,
            9,
        ),
    ),
    (
        "^NDX",
        SeriesRecipe::log(
            &[
                ("2000-03-10", 4816.35),
                ("2002-10-09", 812.43),
                ("2007-10-31", 2238.98),
                ("2009-03-09", 1027.04),
                ("2013-12-31", 3592.00),
                ("2018-08-29", 7700.00),
                ("2020-03-23", 7000.00),
                ("2021-11-19", 16573.37),
                ("2022-10-14", 10649.15),
                ("2024-12-31", 18000.00),
            ],
            13,
            0.016,
            11,
        ),
    ),
    (
        "GLD",
        SeriesRecipe::log(
            &[
                ("2004-11-18", 44.38),
                ("2008-03-17", 93.56),
                ("2011-08-22", 185.85),
                ("2015-12-03", 101.17),
                ("2020-08-06", 194.45),
                ("2022-03-08", 193.30),
                ("2024-12-31", 210.00),
            ],
            17,
            0.009,
            7,
        ),
    ),
    (
        "TLT",
        SeriesRecipe::log(
            &[
                ("2002-07-30", 85.12),
                ("2008-12-30", 122.15),
                ("2012-07-24", 128.53),
                ("2016-07-08", 143.62),
                ("2020-03-09", 179.70),
                ("2022-10-24", 92.74),
                ("2024-12-31", 98.00),
            ],
            19,
            0.013,
            9,
        ),
    ),
    (
        "UUP",
        SeriesRecipe::log(
            &[
                ("2007-03-20", 24.77),
                ("2008-11-21", 26.45),
                ("2015-03-13", 26.73),
                ("2020-03-20", 28.95),
                ("2022-09-27", 30.93),
                ("2024-12-31", 29.50),
            ],
            23,
            0.006,
            5,
        ),
    ),
    (
        "BTC-USD",
        SeriesRecipe::log(
            &[
                ("2013-11-29", 1090.00),
                ("2015-01-14", 210.00),
                ("2017-12-17", 19500.00),
                ("2018-12-15", 3200.00),
                ("2020-03-12", 4816.00),
                ("2021-11-10", 68789.63),
                ("2022-11-21", 15760.00),
                ("2024-12-31", 95000.00),
            ],
            29,
            0.05,
            3,
        ),
    ),
    ("^VIX", VIX_RECIPE),
];

pub const MACRO_RECIPES: &[(&str, SeriesRecipe)] = &[
    ("VIX", VIX_RECIPE),
    (
        "DXY",
        SeriesRecipe::log(
            &[
                ("2000-01-03", 102.0),
                ("2002-01-30", 119.0),
                ("2008-03-17", 71.0),
                ("2017-01-03", 103.0),
                ("2020-03-20", 102.8),
                ("2022-09-27", 114.0),
                ("2024-12-31", 103.5),
            ],
            37,
            0.008,
            9,
        ),
    ),
    (
        "TENY",
        SeriesRecipe::log(
            &[
                ("2000-01-03", 6.58),
                ("2003-06-13", 3.11),
                ("2006-06-28", 5.24),
                ("2008-12-30", 2.05),
                ("2012-07-24", 1.40),
                ("2016-07-08", 1.36),
                ("2018-10-05", 3.23),
                ("2020-08-04", 0.51),
                ("2022-10-20", 4.33),
                ("2024-12-31", 4.10),
            ],
            41,
            0.02,
            7,
        )
        .linear(),
    ),
    (
        "CPI_YoY",
        SeriesRecipe::log(
            &[
                ("2000-01-14", 2.7),
                ("2009-07-14", -1.9),
                ("2011-09-14", 3.9),
                ("2015-01-14", -0.1),
                ("2020-05-12", 0.1),
                ("2022-06-10", 9.1),
                ("2024-12-10", 3.3),
            ],
            43,
            0.03,
            11,
        )
        .linear(),
    ),
    (
        "OIL",
        SeriesRecipe::log(
            &[
                ("2000-01-03", 25.6),
                ("2008-07-03", 145.3),
                ("2009-02-18", 34.9),
                ("2014-06-20", 107.3),
                ("2016-02-11", 26.2),
                ("2020-04-21", 15.0),
                ("2022-03-08", 124.0),
                ("2024-12-31", 78.0),
            ],
            47,
            0.035,
            5,
        ),
    ),
];

/// Monday to Friday from `start` through `end`, inclusive.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .collect()
}

/// Anchors sorted by date, a repeated date keeps its last value.
fn parse_anchors(anchors: &[(&str, f64)]) -> Result<Vec<(NaiveDate, f64)>> {
    let mut parsed = anchors
        .iter()
        .map(|&(date, value)| Ok((parse_calendar_date(date)?, value)))
        .collect::<Result<Vec<_>>>()?;
    parsed.sort_by_key(|&(date, _)| date);
    let mut deduped: Vec<(NaiveDate, f64)> = Vec::with_capacity(parsed.len());
    for (date, value) in parsed {
        match deduped.last_mut() {
            Some(last) if last.0 == date => last.1 = value,
            _ => deduped.push((date, value)),
        }
    }
    Ok(deduped)
}

fn seeded_noise(seed: u64, scale: f64, len: usize) -> Result<Vec<f64>> {
    let normal = Normal::new(0.0, scale).map_err(|e| anyhow!("Invalid noise scale {}: {:?}", scale, e))?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..len)
        .map(|_| normal.inverse_cdf(rng.gen_range(f64::MIN_POSITIVE..1.0)))
        .collect())
}

/// One synthetic series from its first anchor through `end`.
pub fn generate_series(recipe: &SeriesRecipe, end: NaiveDate) -> Result<Series> {
    let anchors = parse_anchors(recipe.anchors)?;
    let Some(&(start, _)) = anchors.first() else {
        bail!("Recipe has no anchors");
    };
    if recipe.method == Interpolation::Log && anchors.iter().any(|&(_, v)| v <= 0.0) {
        bail!("Log interpolation requires positive anchors");
    }

    let days = business_days(start, end);
    let noise = smooth_data(&seeded_noise(recipe.seed, recipe.noise, days.len())?, recipe.smooth);

    let xs: Vec<f64> = anchors.iter().map(|&(d, _)| date_to_epoch_ms(d) as f64).collect();
    let ys: Vec<f64> = match recipe.method {
        Interpolation::Log => anchors.iter().map(|&(_, v)| v.ln()).collect(),
        Interpolation::Linear => anchors.iter().map(|&(_, v)| v).collect(),
    };

    Ok(days
        .iter()
        .zip(noise)
        .map(|(&day, eps)| {
            let t = date_to_epoch_ms(day);
            let baseline = interp_linear(t as f64, &xs, &ys);
            let value = match recipe.method {
                Interpolation::Log => (baseline + eps).exp(),
                Interpolation::Linear => {
                    let v = baseline * (1.0 + eps);
                    if v < 0.0 { baseline } else { v }
                }
            };
            TimePoint::new(t, Some(round_to(value, VALUE_PRECISION)))
        })
        .collect())
}

pub fn generate_payload(recipes: &[(&str, SeriesRecipe)], end: NaiveDate) -> Result<SeriesMap> {
    recipes
        .iter()
        .map(|(key, recipe)| Ok((key.to_string(), generate_series(recipe, end)?)))
        .collect()
}

/// Last business day on or before `date`.
pub fn last_business_day(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date - Days::new(1),
        Weekday::Sun => date - Days::new(2),
        _ => date,
    }
}
