use dungeon_core::{
    Dungeon, DungeonConfig, RoomCoord, TileCoord, generate_dungeon, generate_dungeon_from_seed,
};

use std::{fs::create_dir as create_generated_dir, path::Path};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Number of rooms along the horizontal axis
    #[arg(long, default_value_t = 3)]
    rooms_x: usize,

    /// Number of rooms along the vertical axis
    #[arg(long, default_value_t = 3)]
    rooms_y: usize,

    /// Width of each room in tiles
    #[arg(long, default_value_t = 40)]
    room_width: usize,

    /// Height of each room in tiles
    #[arg(long, default_value_t = 30)]
    room_height: usize,

    /// Seed for reproducible generation; omit for a random dungeon
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the generated dungeon as a tile map
    #[arg(short, long, default_value_t = false)]
    preview: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let args = Args::parse();

    let config = DungeonConfig {
        rooms_x: args.rooms_x,
        rooms_y: args.rooms_y,
        room_width: args.room_width,
        room_height: args.room_height,
        ..DungeonConfig::default()
    };

    let dungeon = match args.seed {
        Some(seed) => generate_dungeon_from_seed(&config, seed)?,
        None => generate_dungeon(&config)?,
    };

    if args.preview {
        print_tile_map(&dungeon);
    }

    let dungeon_filename = {
        use std::time::SystemTime;

        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .expect("System clock is set before the unix epoch!");
        format!("generated/{}-dungeon.json", now.as_millis())
    };

    match Path::new("generated").try_exists() {
        Ok(false) => {
            create_generated_dir("generated")?;
            println!("Directory 'generated' created.");
        }
        Err(e) => {
            eprintln!("Error checking for 'generated' directory: {}", e);
            return Err(e.into());
        }
        _ => {}
    }

    println!("Saving dungeon as JSON to: {}", dungeon_filename);

    let file = std::fs::File::create(&dungeon_filename)?;
    serde_json::to_writer(file, &dungeon)?;

    Ok(())
}

// Renders the full room grid as one tile map, '#' for walls and '.' for
// floor, with a blank line between room rows.
fn print_tile_map(dungeon: &Dungeon) {
    for room_y in 0..dungeon.rooms_y() {
        let room_row: Vec<_> = (0..dungeon.rooms_x())
            .map(|room_x| dungeon.room(RoomCoord::new(room_x, room_y)))
            .collect();

        let room_height = room_row.first().map_or(0, |room| room.height());
        for tile_y in 0..room_height {
            let mut line = String::new();
            for room in &room_row {
                for tile_x in 0..room.width() {
                    let glyph = if room.is_floor(TileCoord::new(tile_x, tile_y)) {
                        '.'
                    } else {
                        '#'
                    };
                    line.push(glyph);
                }
                line.push(' ');
            }
            println!("{}", line);
        }
        println!();
    }
}
