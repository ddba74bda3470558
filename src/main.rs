mod animation;
mod controller;
mod cube;
mod r#move;
mod sequencer;

mod prelude;
use prelude::*;

#[cfg(test)]
mod test;

use controller::{Control, Controller};

/// One frame at 60 fps.
const FRAME: Duration = Duration::from_micros(16_667);

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let controls = if args.is_empty() {
        vec![Control::Scramble, Control::Solve]
    } else {
        args.iter()
            .map(|arg| arg.parse())
            .collect::<anyhow::Result<Vec<Control>>>()?
    };

    let mut controller = Controller::new();
    for control in controls {
        controller.activate(control);

        let mut frames = 0;
        while !controller.is_idle() {
            controller.tick(FRAME);
            frames += 1;

            if let Some(in_flight) = controller.in_flight() {
                log::trace!(
                    "{} {:?}{:+} {:.1} degrees",
                    in_flight.move_,
                    in_flight.axis,
                    in_flight.layer_sign,
                    in_flight.angle
                );
            }
        }

        log::info!("{} ({} frames)", controller.move_list(), frames);
        log::info!("\n{}", controller.cube());
    }

    Ok(())
}
