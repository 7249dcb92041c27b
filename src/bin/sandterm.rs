//! sandterm - run the particle engine in a truecolor terminal
//!
//! Usage: `sandterm [sand|cube|crawl] [cycles] [settings.json]`
//!
//! Two grid rows share one character cell (upper half block). Diagnostics
//! go through `tracing`; set `RUST_LOG=ledsand_engine=debug` for more.

#[cfg(not(target_arch = "wasm32"))]
mod term {
    use std::io::{self, Write};

    use ledsand_engine::{
        Crawler, EdgeMode, EngineError, EngineSettings, FrameBuffer, ParticleEngine, Renderer, Rgb,
        TopologyKind,
    };
    use ledsand_engine::spatial::Topology;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    const FLAT_SIZE: u32 = 32;
    const CUBE_PANEL: u32 = 16;
    const FRAME_MS: u32 = 20;
    /// Cycles between gravity changes
    const TURN_EVERY: u32 = 300;

    /// Frame buffer that also paints each presented frame to stdout
    struct Terminal {
        inner: FrameBuffer,
        out: io::Stdout,
    }

    impl Terminal {
        fn new(width: u32, height: u32, seed: u64) -> Self {
            print!("\x1b[2J\x1b[?25l");
            Self { inner: FrameBuffer::new(width, height, seed), out: io::stdout() }
        }

        fn paint(&mut self) -> io::Result<()> {
            let w = self.inner.grid_width() as usize;
            let frame = self.inner.frame();
            let mut buf = String::with_capacity(frame.len() * 24);
            buf.push_str("\x1b[H");
            for pair in frame.chunks(w * 2) {
                let (upper, lower) = pair.split_at(w.min(pair.len()));
                for (i, top) in upper.iter().enumerate() {
                    let (r, g, b) = channels(*top);
                    let (br, bg, bb) = lower.get(i).map_or((0, 0, 0), |c| channels(*c));
                    buf.push_str(&format!("\x1b[38;2;{r};{g};{b}m\x1b[48;2;{br};{bg};{bb}m\u{2580}"));
                }
                buf.push_str("\x1b[0m\n");
            }
            let mut lock = self.out.lock();
            lock.write_all(buf.as_bytes())?;
            lock.flush()
        }
    }

    impl Drop for Terminal {
        fn drop(&mut self) {
            print!("\x1b[0m\x1b[?25h");
        }
    }

    fn channels(abgr: u32) -> (u8, u8, u8) {
        (abgr as u8, (abgr >> 8) as u8, (abgr >> 16) as u8)
    }

    impl Renderer for Terminal {
        fn grid_width(&self) -> u32 {
            self.inner.grid_width()
        }

        fn grid_height(&self) -> u32 {
            self.inner.grid_height()
        }

        fn set_pixel_instant(&mut self, x: u32, y: u32, colour: Rgb) {
            self.inner.set_pixel_instant(x, y, colour);
        }

        fn show_pixels(&mut self) {
            self.inner.show_pixels();
            if let Err(e) = self.paint() {
                tracing::error!(error = %e, "terminal write failed");
            }
        }

        fn random_int16(&mut self, low: i16, high: i16) -> i16 {
            self.inner.random_int16(low, high)
        }

        fn output_message(&mut self, message: &str) {
            tracing::info!(target: "sandterm", "{message}");
        }

        fn ms_sleep(&mut self, ms: u32) {
            self.inner.ms_sleep(ms);
        }
    }

    #[derive(Clone, Copy)]
    enum Demo {
        Sand,
        Cube,
        Crawl,
    }

    struct Args {
        demo: Demo,
        cycles: u32,
        settings: Option<String>,
    }

    fn parse_args() -> Result<Args, EngineError> {
        let mut args = std::env::args().skip(1);
        let demo = match args.next().as_deref() {
            None | Some("sand") => Demo::Sand,
            Some("cube") => Demo::Cube,
            Some("crawl") => Demo::Crawl,
            Some(other) => {
                return Err(EngineError::InvalidSettings(format!("unknown demo '{other}'")));
            }
        };
        let cycles = match args.next() {
            Some(n) => n
                .parse()
                .map_err(|_| EngineError::InvalidSettings(format!("bad cycle count '{n}'")))?,
            None => 2000,
        };
        let settings = match args.next() {
            Some(path) => Some(std::fs::read_to_string(&path).map_err(|e| {
                EngineError::InvalidSettings(format!("cannot read {path}: {e}"))
            })?),
            None => None,
        };
        Ok(Args { demo, cycles, settings })
    }

    fn load_settings(json: Option<&str>, demo: Demo) -> Result<EngineSettings, EngineError> {
        if let Some(json) = json {
            return EngineSettings::from_json(json);
        }
        let mut settings = EngineSettings { shake: 8, bounce_energy: 204, ..Default::default() };
        if let Demo::Cube = demo {
            settings.edges = EdgeMode::Wrap;
            settings.topology = TopologyKind::Cube { panel_size: CUBE_PANEL };
        }
        Ok(settings)
    }

    fn grid_size(settings: &EngineSettings) -> (u32, u32) {
        match settings.topology {
            TopologyKind::Flat => (FLAT_SIZE, FLAT_SIZE),
            TopologyKind::Cube { panel_size } => (panel_size * 3, panel_size * 2),
        }
    }

    /// Hollow box with a gap in the top and bottom walls
    fn draw_box(engine: &mut ParticleEngine<Terminal>) {
        let wall = Rgb::new(90, 90, 90);
        for i in 0..10 {
            engine.set_static_pixel(11 + i, 11, wall);
            engine.set_static_pixel(11 + i, 20, wall);
            engine.set_static_pixel(11, 11 + i, wall);
            engine.set_static_pixel(20, 11 + i, wall);
        }
        for x in [15, 16] {
            engine.set_static_pixel(x, 11, Rgb::BLACK);
            engine.set_static_pixel(x, 20, Rgb::BLACK);
        }
    }

    fn run_engine(args: &Args) -> Result<(), EngineError> {
        let settings = load_settings(args.settings.as_deref(), args.demo)?;
        tracing::debug!(settings = %settings.to_json(), "engine settings");
        let (w, h) = grid_size(&settings);
        let terminal = Terminal::new(w, h, settings.seed);
        let mut engine = ParticleEngine::new(terminal, settings)?;

        if let Topology::Flat = engine.space().topology() {
            draw_box(&mut engine);
        }
        let grains = (w * h / 4) as usize;
        for _ in 0..grains {
            let colour = Rgb::random_bright(255, |lo, hi| engine.renderer_mut().random_int16(lo, hi));
            if engine.add_particle(colour, 0, 0).is_none() {
                break;
            }
        }
        tracing::info!(grains = engine.particle_count(), "grains placed");

        let accel: i16 = 8;
        let turns: [(i16, i16, i16); 6] = [
            (0, -accel, 0),
            (accel, 0, 0),
            (0, accel, 0),
            (-accel, 0, 0),
            (accel, -accel, 0),
            (-accel, accel, 0),
        ];
        for cycle in 0..args.cycles {
            if cycle % TURN_EVERY == 0 {
                let (ax, ay, az) = turns[(cycle / TURN_EVERY) as usize % turns.len()];
                engine.set_acceleration_3d(ax, ay, az);
            }
            engine.run_cycle();
            engine.renderer_mut().ms_sleep(FRAME_MS);
        }
        tracing::info!(frames = engine.frame(), stats = ?engine.last_stats(), "done");
        Ok(())
    }

    fn run_crawler(args: &Args) -> Result<(), EngineError> {
        let mut terminal = Terminal::new(FLAT_SIZE, FLAT_SIZE, EngineSettings::default().seed);
        let mut crawler = Crawler::new(&mut terminal, 40, true, 255);
        for _ in 0..args.cycles {
            crawler.run_cycle(&mut terminal);
            terminal.ms_sleep(FRAME_MS);
        }
        Ok(())
    }

    pub fn main() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "sandterm=info,ledsand_engine=warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();

        let result = parse_args().and_then(|args| match args.demo {
            Demo::Sand | Demo::Cube => run_engine(&args),
            Demo::Crawl => run_crawler(&args),
        });
        if let Err(e) = result {
            tracing::error!(error = %e, "sandterm failed");
            std::process::exit(1);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    term::main();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
