use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use graham::algorithms::convex_hull_with;
use graham::algorithms::sorting::{HeapSort, InsertionSort, QuickSort, StdSort};
use graham::data::{Hull, Point};

/// Print the convex hull of a set of planar points.
///
/// Points are read one per line as `x y` or `x,y`. Blank lines and lines starting with `#` are
/// skipped. The hull is printed clockwise, one vertex per line, starting at the lowest point.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// File to read points from. Reads standard input when omitted.
  input: Option<PathBuf>,

  /// Generate this many uniformly random points instead of reading input.
  #[arg(short, long, conflicts_with = "input")]
  random: Option<usize>,

  /// Seed for `--random`, for reproducible point sets.
  #[arg(short, long, requires = "random")]
  seed: Option<u64>,

  /// Random coordinates are drawn from [0, extent).
  #[arg(short, long, default_value_t = 1000.0)]
  extent: f64,

  /// Sorting algorithm used for the angular sort.
  #[arg(long, value_enum, default_value_t = Sort::Std)]
  sort: Sort,

  /// Quicksort partitions of at most this many points are finished with insertion sort.
  #[arg(long, default_value_t = 0)]
  insertion_threshold: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Sort {
  Std,
  Insertion,
  Heap,
  Quick,
}

/// Parse one point per line, `x y` or `x,y`.
fn parse_points(text: &str) -> Result<Vec<Point<f64>>, Box<dyn Error + Send + Sync + 'static>> {
  let mut points = Vec::new();
  for (index, line) in text.lines().enumerate() {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }
    let fields: Vec<&str> = line
      .split(|c: char| c == ',' || c.is_whitespace())
      .filter(|field| !field.is_empty())
      .collect();
    let [x, y] = fields.as_slice() else {
      return Err(format!("line {}: expected two coordinates, found `{line}`", index + 1).into());
    };
    let coord = |field: &str| {
      field
        .parse::<f64>()
        .map_err(|_| format!("line {}: invalid coordinate `{field}`", index + 1))
    };
    points.push(Point::new([coord(*x)?, coord(*y)?]));
  }
  Ok(points)
}

fn read_points(input: Option<&Path>) -> Result<Vec<Point<f64>>, Box<dyn Error + Send + Sync + 'static>> {
  let text = match input {
    Some(path) => fs::read_to_string(path)?,
    None => {
      let mut text = String::new();
      io::stdin().read_to_string(&mut text)?;
      text
    }
  };
  parse_points(&text)
}

fn random_points(n: usize, extent: f64, seed: Option<u64>) -> Vec<Point<f64>> {
  let mut rng = match seed {
    Some(seed) => SmallRng::seed_from_u64(seed),
    None => SmallRng::from_entropy(),
  };
  (0..n)
    .map(|_| Point::new([rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)]))
    .collect()
}

fn hull(points: &[Point<f64>], sort: Sort, insertion_threshold: usize) -> Result<Hull<f64>, graham::Error> {
  match sort {
    Sort::Std => convex_hull_with(points, StdSort),
    Sort::Insertion => convex_hull_with(points, InsertionSort),
    Sort::Heap => convex_hull_with(points, HeapSort),
    Sort::Quick => convex_hull_with(points, QuickSort::with_insertion_threshold(insertion_threshold)),
  }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
  env_logger::init();
  let cli = Cli::parse();
  log::debug!("{:?}", cli);

  let points = match cli.random {
    Some(n) => {
      if !(cli.extent > 0.0) {
        return Err(format!("invalid extent: {} (must be positive)", cli.extent).into());
      }
      random_points(n, cli.extent, cli.seed)
    }
    None => read_points(cli.input.as_deref())?,
  };
  log::info!("Computing the hull of {} points with {:?} sort", points.len(), cli.sort);

  let hull = hull(&points, cli.sort, cli.insertion_threshold)?;
  log::info!("Hull has {} vertices", hull.len());

  let mut out = io::stdout().lock();
  for pt in hull.iter() {
    writeln!(out, "{pt}")?;
  }
  Ok(())
}
