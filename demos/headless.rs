use mapcore::prelude::*;

/// Example of driving the map core without any UI: pan, zoom, fit bounds, and
/// enumerate the tiles a renderer would need.
fn main() -> mapcore::Result<()> {
    env_logger::init();

    let mut map = MapBuilder::new()
        .with_center_and_zoom(LatLng::new(37.7749, -122.4194), 12.0) // San Francisco
        .with_size(ScreenSize::new(1024.0, 768.0))
        .with_bounding_mask(BoundingMask::None)
        .with_tile_source(Box::new(OpenStreetMapSource::new()))
        .build()?;

    map.on_event(|event| {
        if let MapEvent::CenterChanged { coordinate, .. } = event {
            println!("   -> center committed at {:.4}, {:.4}", coordinate.lat, coordinate.lng);
        }
    });

    println!("Map created:");
    println!("   Center: {:.4}, {:.4}", map.center_coordinate().lat, map.center_coordinate().lng);
    println!("   Zoom: {} ({:.1} m/px)", map.zoom(), map.meters_per_pixel());
    println!("   Scale: 1:{:.0}", map.scale_denominator());

    println!("\nVisiting a few cities:");
    let locations = [
        ("New York", LatLng::new(40.7128, -74.0060), 11.0),
        ("London", LatLng::new(51.5074, -0.1278), 10.0),
        ("Tokyo", LatLng::new(35.6762, 139.6503), 12.0),
    ];

    for (name, location, zoom) in locations {
        println!("   {name}:");
        map.set_center_coordinate(location, false);
        map.set_zoom(zoom, false);
    }

    println!("\nPanning:");
    for (dx, dy) in [(100.0, 0.0), (0.0, 100.0), (-50.0, -50.0)] {
        map.move_by(ScreenPoint::new(dx, dy));
        let center = map.center_coordinate();
        println!(
            "   moved by ({dx}, {dy}) px -> {:.4}, {:.4}",
            center.lat, center.lng
        );
    }

    println!("\nFitting Honshu:");
    map.zoom_with_bounds(LatLng::new(33.4, 132.0), LatLng::new(41.5, 142.0), false)?;
    println!("   fitted at zoom {}", map.zoom());

    let tiles = map.visible_tiles();
    println!("\nThe renderer would now load {} tiles, such as:", tiles.len());
    if let Some(source) = map.tile_sources().get(0) {
        for tile in tiles.iter().take(3) {
            println!("   {}", source.url(*tile));
        }
    }

    Ok(())
}
