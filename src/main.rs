use geohud::algorithms::path_length_meters;
use geohud::api::{FixReadout, TextFormatter, JsonFormatter};
use geohud::core::landmarks::{bermuda_triangle, neighbors, NICE};
use geohud::core::{GeoPoint, PointOfInterest, PositionFix};
use geohud::hardware::{
    HeadingConvention, MockSensor, OrientationAdapter, RawOrientation, SensorKind, SensorReading,
    SensorResult, SensorSource,
};
use geohud::processing::parse_country_dataset;
use geohud::utils::{ConfigurationManager, OverlayConfig};
use geohud::{distance_meters, initial_bearing_deg, OverlaySession};
use tracing_subscriber::EnvFilter;

const HUD_WIDTH: f64 = 1280.0;
const FRAME_INTERVAL_MS: u64 = 100;

fn usage(program: &str) {
    eprintln!("Usage: {} [config.json]", program);
    eprintln!("   or: {} --json [config.json]", program);
    eprintln!("   or: {} --countries <countries.json>", program);
    eprintln!("   or: {} --distances", program);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("geohud", |s| s.as_str());

    match args.get(1).map(|s| s.as_str()) {
        Some("--distances") => {
            distances_demo();
            Ok(())
        }
        Some("--countries") => {
            let Some(path) = args.get(2) else {
                usage(program);
                return Err("missing dataset path".into());
            };
            countries_demo(path)
        }
        Some("--json") => sweep_demo(load_config(args.get(2))?, true),
        Some("--help") | Some("-h") => {
            usage(program);
            Ok(())
        }
        other => sweep_demo(load_config(other)?, false),
    }
}

fn load_config<S: AsRef<str>>(path: Option<S>) -> Result<OverlayConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ConfigurationManager::from_file(path.as_ref())?.config().clone()),
        None => Ok(OverlayConfig {
            pois: neighbors(),
            ..Default::default()
        }),
    }
}

/// Orientation source stepping the heading on every poll
struct HeadingSweep {
    adapter: OrientationAdapter,
    compass: f64,
    step: f64,
    remaining: u32,
}

impl SensorSource for HeadingSweep {
    fn poll(&mut self) -> SensorResult<Option<SensorReading>> {
        if self.remaining == 0 {
            return Ok(None);
        }

        // Device-frame alpha, as a phone would report it
        let sample = self.adapter.adapt(RawOrientation {
            alpha: Some((360.0 - self.compass).rem_euclid(360.0)),
            beta: Some(-2.0),
            gamma: None,
        });
        self.compass = (self.compass + self.step).rem_euclid(360.0);
        self.remaining -= 1;
        Ok(Some(SensorReading::Orientation(sample)))
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Orientation
    }

    fn id(&self) -> u8 {
        2
    }

    fn is_available(&self) -> bool {
        true
    }

    fn stop(&mut self) {
        self.remaining = 0;
    }
}

/// Sweep the heading across north while standing west of Nice
fn sweep_demo(config: OverlayConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = OverlaySession::new(config);

    let mut position = MockSensor::position(1);
    position.push_reading(SensorReading::Position(
        PositionFix::new(GeoPoint::new(43.55, 6.90), 12.0, 0).with_altitude(35.0, Some(6.0)),
    ));

    let sweep = HeadingSweep {
        adapter: OrientationAdapter::new(HeadingConvention::DeviceAlpha),
        compass: 330.0,
        step: 10.0,
        remaining: 13,
    };

    session.add_source(Box::new(position))?;
    session.add_source(Box::new(sweep))?;
    session.hub_mut().subscribe_failures(Box::new(|sensor, error| {
        eprintln!("sensor {:?} failed: {}", sensor, error);
    }))?;
    session.start(0);

    let text = TextFormatter::new().with_hidden();
    let json_out = JsonFormatter::new();
    let mut now = 0;
    loop {
        let events = session.pump(now)?;
        if events.is_empty() {
            break;
        }

        if now == 0 {
            if let Some(fix) = session.hub().snapshot().position {
                println!("Current fix:");
                for (label, value) in FixReadout::from_fix(&fix).rows() {
                    println!("  {:<18} {}", label, value);
                }
                println!();
            }
        }

        let frame = session.frame(HUD_WIDTH);
        if json {
            println!("{}", json_out.format_json(&frame)?);
        } else {
            println!("{}\n", text.format_text(&frame));
        }
        now += FRAME_INTERVAL_MS;
    }

    if let Some(bounds) = session.view_bounds() {
        let c = bounds.center();
        println!("View centre: {:.4}, {:.4}", c.latitude, c.longitude);
    }

    session.shutdown();
    Ok(())
}

fn distances_demo() {
    for target in neighbors() {
        println!(
            "Nice -> {:<10} {:>8.1} km  bearing {:>5.1}°",
            target.name,
            distance_meters(&NICE, &target.point) / 1000.0,
            initial_bearing_deg(&NICE, &target.point)
        );
    }

    let mut triangle = bermuda_triangle().to_vec();
    triangle.push(triangle[0]);
    println!("Bermuda triangle perimeter: {:.0} km", path_length_meters(&triangle) / 1000.0);
}

fn countries_demo(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    let countries: Vec<PointOfInterest> = parse_country_dataset(&json)?;

    let mut ranked: Vec<(f64, &PointOfInterest)> = countries
        .iter()
        .map(|c| (distance_meters(&NICE, &c.point), c))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    println!("{} countries, nearest to Nice:", countries.len());
    for (distance, country) in ranked.iter().take(10) {
        println!("  {:<24} {:>8.0} km", country.name, distance / 1000.0);
    }
    Ok(())
}
