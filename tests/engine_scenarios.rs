use std::collections::HashSet;

use ledsand_engine::{
    EdgeMode, EngineError, EngineSettings, FrameBuffer, Particle, ParticleEngine, Renderer, Rgb,
};

const RED: Rgb = Rgb::new(255, 0, 0);

fn engine(width: u32, height: u32, settings: EngineSettings) -> ParticleEngine<FrameBuffer> {
    ParticleEngine::new(FrameBuffer::new(width, height, settings.seed), settings).unwrap()
}

fn fixed(multiplier: u16) -> EngineSettings {
    EngineSettings { space_multiplier: Some(multiplier), ..EngineSettings::default() }
}

fn assert_grains_consistent(e: &ParticleEngine<FrameBuffer>, statics: usize) {
    let mut cells = HashSet::new();
    for p in e.particles() {
        assert!(e.space().contains(p.x, p.y), "grain escaped: {:?}", p);
        let cell = e.space().cell_of(p.x, p.y);
        assert!(cells.insert(cell), "two grains in {:?}", cell);
        assert_ne!(e.pixel_value(cell.0, cell.1), 0);
    }
    assert_eq!(e.grid().occupied_count(), e.particle_count() + statics);
}

#[test]
fn settings_parse_and_reject() {
    let s = EngineSettings::from_json("{}").unwrap();
    assert_eq!(s, EngineSettings::default());

    let s = EngineSettings::from_json(r#"{"edges": "wrap", "shake": 12}"#).unwrap();
    assert_eq!(s.edges, EdgeMode::Wrap);
    assert_eq!(s.shake, 12);

    assert!(matches!(
        EngineSettings::from_json(r#"{"palette_capacity": 0}"#),
        Err(EngineError::InvalidSettings(_))
    ));
    assert!(matches!(EngineSettings::from_json("not json"), Err(EngineError::Config(_))));

    let err = ParticleEngine::new(FrameBuffer::new(0, 4, 1), EngineSettings::default()).err();
    assert!(matches!(err, Some(EngineError::EmptyGrid { .. })));
}

#[test]
fn bounce_energy_orders_rebound_speed() {
    let mut rebounds = Vec::new();
    for energy in [0u8, 64, 128, 204, 255] {
        let mut e = engine(8, 8, EngineSettings { bounce_energy: energy, ..fixed(10) });
        e.insert_particle(Particle::new(45, 25, 0, -40), RED).unwrap();

        let mut hit = false;
        for _ in 0..100 {
            e.step();
            if e.last_stats().wall_hits() > 0 {
                hit = true;
                break;
            }
        }
        assert!(hit, "energy {} never reached the floor", energy);
        let p = e.particle(0).unwrap();
        assert_eq!(p.y, 0);
        rebounds.push(p.vy);
    }

    assert_eq!(rebounds.first(), Some(&0));
    assert_eq!(rebounds.last(), Some(&40));
    assert!(rebounds.windows(2).all(|w| w[0] <= w[1]), "{:?}", rebounds);
}

#[test]
fn shaken_grains_stay_inside_and_under_cap() {
    let s = EngineSettings { shake: 60, bounce_energy: 128, seed: 99, ..fixed(12) };
    let mut e = engine(24, 16, s);
    for x in 4..20 {
        e.set_static_pixel(x, 8, Rgb::new(40, 40, 40));
    }
    for _ in 0..80 {
        let colour = Rgb::random_bright(255, |lo, hi| e.renderer_mut().random_int16(lo, hi));
        e.add_particle(colour, 0, 0).unwrap();
    }

    let cap = e.velocity_cap() as i32;
    let gravity = [(0, -9), (9, 0), (0, 9), (-9, 0)];
    for step in 0..400 {
        if step % 100 == 0 {
            let (ax, ay) = gravity[step / 100];
            e.set_acceleration(ax, ay);
        }
        e.run_cycle();
        for p in e.particles() {
            let (vx, vy) = (p.vx as i32, p.vy as i32);
            assert!(vx * vx + vy * vy <= cap * cap, "over cap: {:?}", p);
        }
    }
    assert_grains_consistent(&e, 16);
    assert_eq!(e.renderer().frames_shown(), 400);
}

#[test]
fn text_line_falls_to_floor() {
    let mut e = engine(16, 16, fixed(10));
    for x in 2..=13 {
        e.set_static_pixel(x, 10, RED);
    }
    assert_eq!(e.img_to_particles(), 12);
    assert_grains_consistent(&e, 0);

    e.set_acceleration(0, -20);
    for _ in 0..200 {
        e.run_cycle();
    }

    let columns: HashSet<u32> = e
        .particles()
        .map(|p| {
            let (cx, cy) = e.space().cell_of(p.x, p.y);
            assert_eq!(cy, 0);
            cx
        })
        .collect();
    assert_eq!(columns, (2..=13).collect());

    // Bottom row is last in the presented frame
    let frame = e.renderer().frame();
    let bottom = &frame[15 * 16..];
    for (x, px) in bottom.iter().enumerate() {
        let expected = if (2..=13).contains(&(x as u32)) { RED } else { Rgb::BLACK };
        assert_eq!(*px, expected.to_abgr(), "column {}", x);
    }
}

#[test]
fn deletion_shifts_later_grains_down() {
    let mut e = engine(8, 8, fixed(10));
    let a = e.add_particle_at(1, 1, RED, 0, 0).unwrap();
    let b = e.add_particle_at(2, 2, RED, 0, 0).unwrap();
    let c = e.add_particle_at(3, 3, RED, 0, 0).unwrap();
    assert_eq!((a, b, c), (0, 1, 2));

    let gone = e.delete_particle(1).unwrap();
    assert_eq!(e.space().cell_of(gone.x, gone.y), (2, 2));
    assert_eq!(e.particle_count(), 2);
    assert_eq!(e.particle(1).map(|p| e.space().cell_of(p.x, p.y)), Some((3, 3)));
    assert_eq!(e.pixel_value(2, 2), 0);
    assert!(e.delete_particle(5).is_none());

    assert_eq!(e.add_particle_at(2, 2, RED, 0, 0), Some(2));
    assert_grains_consistent(&e, 0);
}

#[test]
fn diagnostics_reach_the_renderer() {
    let s = EngineSettings { initial_store_capacity: 2, store_growth: 1, ..fixed(10) };
    let mut e = engine(2, 2, s);
    for _ in 0..4 {
        assert!(e.add_particle(RED, 0, 0).is_some());
    }
    assert!(e.add_particle(RED, 0, 0).is_none());
    assert!(e.add_particle_at(0, 0, RED, 0, 0).is_none());

    let messages = e.renderer_mut().take_messages();
    assert!(messages.iter().any(|m| m == "Particle store expanded to capacity 3"));
    assert!(messages.iter().any(|m| m == "Particle store expanded to capacity 4"));
    assert!(messages.iter().any(|m| m == "Failed to find free position for new particle"));
    assert!(messages.iter().any(|m| m.starts_with("Cannot place particle at 0,0")));
}

#[test]
fn clearing_particles_freezes_the_image() {
    let mut e = engine(8, 8, fixed(10));
    e.add_particle_at(4, 6, RED, 0, 0).unwrap();
    e.clear_particles();
    assert_eq!(e.particle_count(), 0);

    e.set_acceleration(0, -20);
    for _ in 0..50 {
        e.step();
    }
    // The pixel no longer belongs to a grain, so nothing moves it
    assert_eq!(e.colour(e.pixel_value(4, 6)), RED);

    e.clear_image();
    assert_eq!(e.grid().occupied_count(), 0);
    e.update_display();
    e.renderer_mut().show_pixels();
    assert!(e.renderer().frame().iter().all(|&px| px == Rgb::BLACK.to_abgr()));
}
