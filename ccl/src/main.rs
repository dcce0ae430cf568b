use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use ccl::config::CCLConfig;
use ccl::io;
use ccl::io::cli::Cli;
use ccl::io::cloud_to_svg::cloud_to_svg;
use ccl::io::input::ExtTagList;
use ccl::io::output::{CloudOutput, PlacedTag};
use ccl::sizer;
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use tagcloud_rs::cloud::CircularCloudLayouter;
use tagcloud_rs::curves::ArchimedeanSpiral;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CCLConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed CCLConfig: {config:?}");

    let tag_list = match &args.input_file {
        Some(input_file) => io::read_tag_list(input_file.as_path())?,
        None => {
            warn!("[MAIN] No input file provided, generating {} demo tags", config.n_demo_tags);
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            ExtTagList {
                name: "demo".to_string(),
                tags: sizer::demo_tags(config.n_demo_tags, &mut rng),
            }
        }
    };

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    ensure!(!tag_list.tags.is_empty(), "tag list is empty, nothing to lay out");

    let name = tag_list.name.clone();
    let tags = sizer::sized_descending(tag_list.tags);

    let spiral = ArchimedeanSpiral::try_new(config.spiral_start_radius, config.spiral_extend_ratio)?;
    let mut layouter = CircularCloudLayouter::with_config(spiral, config.layouter)?;

    let mut placed_tags = Vec::with_capacity(tags.len());
    for (i, tag) in tags.iter().enumerate() {
        let rect = layouter.put_next_rectangle(tag.size).with_context(|| {
            format!("could not place tag '{}' with weight {}", tag.text, tag.weight)
        })?;
        info!(
            "[CCL] placed tag {}/{} '{}' at ({}, {})",
            i + 1,
            tags.len(),
            tag.text,
            rect.x_min,
            rect.y_min
        );
        placed_tags.push(PlacedTag {
            text: tag.text.clone(),
            weight: tag.weight,
            rect,
        });
    }

    let extent = layouter
        .bounding_extent()
        .expect("cloud with placed tags has an extent");
    info!(
        "[CCL] cloud '{name}' finished: {} tags, extent {}x{}",
        placed_tags.len(),
        extent.width(),
        extent.height()
    );

    {
        let output = CloudOutput {
            name: name.clone(),
            config,
            placed_tags,
            extent,
        };
        let json_path = args.output_folder.join(format!("cloud_{name}.json"));
        io::write_json(&output, Path::new(&json_path))?;
    }

    {
        let svg_path = args.output_folder.join(format!("cloud_{name}.svg"));
        let document = cloud_to_svg(&tags, layouter.rects(), config.svg_draw_options, &name);
        io::write_svg(&document, Path::new(&svg_path))?;
    }

    Ok(())
}
