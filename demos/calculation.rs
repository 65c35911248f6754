use std::env;

use sunpos::angles::dual_axis_angles;
use sunpos::sunpos::{decimal_hours, elapsed_julian_days, sun_position};
use sunpos::types::{Instant, Location};

fn main() -> sunpos::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let instant: Instant = match args.next() {
        Some(ts) => ts.parse()?,
        None => Instant::new(2015, 9, 18, 12, 0, 0.0),
    };
    let location: Location = match args.next() {
        Some(loc) => loc.parse()?,
        None => Location::new(48.148, -11.573),
    };

    let pos = sun_position(&instant, &location);
    let da = dual_axis_angles(&pos);

    println!("=== Solar Position Calculation Example ===");
    println!(
        "Location: {:.3}°, {:.3}°",
        location.latitude, location.longitude
    );
    println!(
        "Date/Time (UTC): {:04}-{:02}-{:02} {:02}:{:02}:{:06.3}",
        instant.year, instant.month, instant.day, instant.hour, instant.minute, instant.second
    );
    println!();
    println!("--- Time ---");
    println!("Decimal hours: {:.4}", decimal_hours(&instant));
    println!("Days since J2000.0: {:.5}", elapsed_julian_days(&instant));
    println!();
    println!("--- Solar Position ---");
    println!("Zenith Angle: {:.3}°", pos.zenith_angle);
    println!("Elevation: {:.3}°", pos.elevation());
    println!(
        "Azimuth: {:.3}° (0°=N, 90°=E, 180°=S)",
        pos.azimuth
    );
    println!();
    println!("--- Dual-Axis Tracker ---");
    println!("Tilt: {:.2}°", da.tilt);
    println!("Panel azimuth: {:.2}°", da.panel_azimuth);

    Ok(())
}
