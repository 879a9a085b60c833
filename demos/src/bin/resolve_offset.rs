use epoch_offset::{EpochOffsetResolver, SignedOffset, Time};
use log::{error, info};
use std::env;
use std::process;
use std::time::SystemTime;

fn main() {
    env_logger::init();

    let args: Vec<_> = env::args().collect();

    if args.len() != 3 {
        println!("usage: resolve_offset SECONDS NANOS");
        process::exit(2);
    }

    let seconds = match args[1].parse::<i64>() {
        Ok(v) => v,
        Err(err) => {
            error!("Bad seconds value {:?}: {}", args[1], err);
            process::exit(2);
        }
    };
    let nanos = match args[2].parse::<u32>() {
        Ok(v) => v,
        Err(err) => {
            error!("Bad nanoseconds value {:?}: {}", args[2], err);
            process::exit(2);
        }
    };

    let offset = SignedOffset::new(seconds, nanos);
    info!("Resolving {:?}", offset);
    println!("offset: {}s", offset);

    match EpochOffsetResolver::<SystemTime>::new().try_resolve(seconds, nanos) {
        Ok(time) => println!("SystemTime: {:?}", time),
        Err(err) => println!("SystemTime: {}", err),
    }

    match EpochOffsetResolver::<Time>::new().try_resolve(seconds, nanos) {
        Ok(time) => println!("Time: {}", time),
        Err(err) => println!("Time: {}", err),
    }
}
