use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use polygon_area::area::{AreaReport, Method};
use polygon_area::{AreaError, GeoRing, PlanarPolicy, estimate, input, read_polygon, reference, svg, write_geojson};

#[derive(Parser)]
#[command(about = "Estimate the area enclosed by a ring of GPS coordinates")]
struct Cli {
    /// Shape file (.geojson, .kml, .gpx) or directory; coordinates are read
    /// from the terminal when absent.
    path: Option<PathBuf>,
    /// Layout of the local planar frame.
    #[arg(long, value_enum, default_value_t = PlanarPolicy::Tangent)]
    planar: PlanarPolicy,
    /// Where interactively entered shapes are saved.
    #[arg(long, default_value = write_geojson::DEFAULT_FILENAME)]
    geojson: PathBuf,
    /// Do not save interactively entered shapes.
    #[arg(long)]
    no_save: bool,
    /// Plot the planar shape to this SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Also print the ellipsoidal geodesic area (geo crate).
    #[arg(long)]
    reference: bool,
}

fn print_report(ring: &GeoRing, report: &AreaReport, with_reference: bool) {
    for result in &report.results {
        let label = match result.method {
            Method::Trapezoidal => "Estimated Area using Trapezoidal Rule",
            Method::Shoelace => "Estimated Area using Shoelace Theorem",
            Method::Spherical => "Area using Spherical Polygon Method",
            Method::Projected => "GIS-Calculated Area (UTM)",
        };
        match &result.area {
            Ok(area) => println!("{}: {:.2} m²", label, area),
            Err(e) => println!("{}: unavailable ({})", label, e),
        }
    }
    if with_reference {
        println!(
            "geodesic: {:.2} m² (geo crate)",
            reference::geodesic_area(ring.points())
        );
    }
}

fn plot(report: &AreaReport, filename: &Path) -> Result<(), AreaError> {
    let mut svg = svg::SVG::around(&report.planar);
    svg.add_shape(&report.planar);
    if let Some(area) = report.area(Method::Shoelace) {
        svg.add_label(&format!("{}: {:.2} m² ({})", Method::Shoelace, area, report.policy));
    }
    std::fs::write(filename, svg.render())?;
    log::info!("plot saved as {}", filename.display());
    Ok(())
}

fn process(ring: &GeoRing, args: &Cli, svg_file: Option<&Path>) -> Result<(), AreaError> {
    ring.info();
    let report = estimate(ring, args.planar);
    print_report(ring, &report, args.reference);
    if let Some(filename) = svg_file {
        plot(&report, filename)?;
    }
    Ok(())
}

/// Plot file of ring `index` of `shape_file`: `<stem>-<shape stem>-<index>.svg`
/// next to `base`, or `base` itself when only one ring is plotted.
fn svg_filename(base: &Path, shape_file: &Path, index: usize, total: usize) -> PathBuf {
    if total <= 1 {
        return base.to_path_buf();
    }
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("plot");
    let shape = shape_file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("shape");
    base.with_file_name(format!("{stem}-{shape}-{index}.svg"))
}

/// Collects a ring from `input`, saves it, then reports and plots it.
fn run_interactive<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    args: &Cli,
) -> Result<GeoRing, AreaError> {
    let ring = input::collect_coordinates(input, output)?;
    if !args.no_save {
        write_geojson::save(&ring, &args.geojson)?;
    }
    process(&ring, args, args.svg.as_deref())?;
    Ok(ring)
}

fn run_files(path: &Path, args: &Cli) -> Result<(), AreaError> {
    let files = read_polygon::shape_files(path);
    if files.is_empty() {
        return Err(AreaError::Parse(format!(
            "no shape file found at {}",
            path.display()
        )));
    }
    let shapes: Vec<(PathBuf, Vec<GeoRing>)> = files
        .into_iter()
        .filter_map(|file| match read_polygon::read_rings(&file) {
            Ok(rings) => Some((file, rings)),
            Err(e) => {
                log::warn!("skipping {}: {}", file.display(), e);
                None
            }
        })
        .collect();
    let total: usize = shapes.iter().map(|(_, rings)| rings.len()).sum();
    for (file, rings) in &shapes {
        for (i, ring) in rings.iter().enumerate() {
            println!();
            println!("{} #{}", file.display(), i);
            let svg_file = args
                .svg
                .as_ref()
                .map(|base| svg_filename(base, file, i, total));
            process(ring, args, svg_file.as_deref())?;
        }
    }
    Ok(())
}

fn run(args: &Cli) -> Result<(), AreaError> {
    match &args.path {
        None => {
            let stdin = io::stdin();
            run_interactive(stdin.lock(), &mut io::stdout(), args)?;
        }
        Some(path) => run_files(path, args)?,
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("polygon-area-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    const SQUARE: &str = "0 0\n0 0.01\n0.01 0.01\n0.01 0\ndone\n";

    #[test]
    fn test_interactive_saves_before_plotting() {
        let dir = temp_dir("save-first");
        let geojson = dir.join("shapes.geojson");
        let geojson_arg = geojson.to_str().unwrap();
        let args = Cli::parse_from([
            "polygon-area",
            "--geojson",
            geojson_arg,
            "--svg",
            "/nonexistent/dir/plot.svg",
        ]);
        let result = run_interactive(SQUARE.as_bytes(), &mut Vec::new(), &args);
        assert_matches!(result, Err(AreaError::Io(_)));
        let saved = read_polygon::read_rings(&geojson).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].len(), 5);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_interactive_plots() {
        let dir = temp_dir("plot");
        let svg = dir.join("plot.svg");
        let args = Cli::parse_from([
            "polygon-area",
            "--no-save",
            "--svg",
            svg.to_str().unwrap(),
        ]);
        let ring = run_interactive(SQUARE.as_bytes(), &mut Vec::new(), &args).unwrap();
        assert_eq!(ring.len(), 5);
        assert!(fs::read_to_string(&svg).unwrap().contains("<polygon"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_svg_filename() {
        let base = Path::new("/tmp/out/plot.svg");
        let file = Path::new("/data/fields/a.geojson");
        assert_eq!(svg_filename(base, file, 0, 1), base);
        assert_eq!(
            svg_filename(base, file, 2, 3),
            Path::new("/tmp/out/plot-a-2.svg")
        );
    }

    #[test]
    fn test_every_ring_gets_its_own_plot() {
        let dir = temp_dir("batch");
        let shapes = dir.join("shapes");
        fs::create_dir_all(&shapes).unwrap();
        for (name, lon) in [("a", 0.0), ("b", 10.0)] {
            let ring = input::collect_coordinates(
                format!("0 {lon}\n0 {}\n0.01 {lon}\ndone\n", lon + 0.01).as_bytes(),
                &mut Vec::new(),
            )
            .unwrap();
            write_geojson::save(&ring, &shapes.join(format!("{name}.geojson"))).unwrap();
        }
        let svg = dir.join("plot.svg");
        let args = Cli::parse_from([
            "polygon-area",
            shapes.to_str().unwrap(),
            "--svg",
            svg.to_str().unwrap(),
        ]);
        run_files(&shapes, &args).unwrap();
        assert!(dir.join("plot-a-0.svg").is_file());
        assert!(dir.join("plot-b-0.svg").is_file());
        assert!(!svg.exists());
        fs::remove_dir_all(&dir).unwrap();
    }
}
