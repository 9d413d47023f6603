//! Command-line interface with encipher, decipher, and slice subcommands

use crate::catalog::TileCatalog;
use crate::codec::{decode_file, encode_to_file};
use crate::io::configuration::{DEFAULT_TILE_DIR, OUTPUT_EXTENSION, SHEET_COLS, SHEET_ROWS};
use crate::io::error::{Result, invalid_parameter};
use crate::io::slicer::slice_sheet;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command-line arguments for the tile cipher tool
#[derive(Parser)]
#[command(name = "stretchr")]
#[command(
    author,
    version,
    about = "Encipher text as a grid of image tiles and back"
)]
pub struct Cli {
    /// Directory holding the sixteen reference tiles (i0.png .. i15.png)
    #[arg(short, long, global = true, default_value = DEFAULT_TILE_DIR)]
    pub tiles: PathBuf,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Cipher operations exposed on the command line
#[derive(Subcommand)]
pub enum Command {
    /// Encipher a text into a tile-grid image
    Encipher {
        /// The text to encipher
        text: String,

        /// Base name of the output image, without extension
        image_name: String,

        /// Directory where the enciphered image will be written
        #[arg(default_value = ".")]
        output_path: PathBuf,
    },

    /// Decipher a tile-grid image back into text
    Decipher {
        /// The enciphered image file
        image_file: PathBuf,
    },

    /// Slice a 4x4 tile sheet into an indexed tile catalog
    Slice {
        /// The sheet image to slice
        sheet: PathBuf,

        /// Directory receiving the indexed tile files
        #[arg(default_value = DEFAULT_TILE_DIR)]
        output_dir: PathBuf,
    },
}

/// Executes the parsed command against the codec
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if catalog loading or the operation itself fails
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Encipher {
                text,
                image_name,
                output_path,
            } => self.encipher(text, image_name, output_path),
            Command::Decipher { image_file } => self.decipher(image_file),
            Command::Slice { sheet, output_dir } => Self::slice(sheet, output_dir),
        }
    }

    // Allow print for user feedback on the saved location
    #[allow(clippy::print_stdout)]
    fn encipher(&self, text: &str, image_name: &str, output_path: &Path) -> Result<()> {
        if text.is_empty() {
            // An empty text yields a 0x0 canvas, which PNG cannot represent
            return Err(invalid_parameter(
                "text",
                &"",
                &"cannot encipher an empty text",
            ));
        }

        let catalog = TileCatalog::load(&self.cli.tiles)?;
        let output = output_path.join(format!("{image_name}.{OUTPUT_EXTENSION}"));
        encode_to_file(&catalog, text, &output)?;

        println!("Saved in {}", output.display());
        Ok(())
    }

    // Allow print for user feedback with the recovered text
    #[allow(clippy::print_stdout)]
    fn decipher(&self, image_file: &Path) -> Result<()> {
        let catalog = TileCatalog::load(&self.cli.tiles)?;
        let text = decode_file(&catalog, image_file)?;

        println!("{text}");
        Ok(())
    }

    // Allow print for user feedback on each written tile
    #[allow(clippy::print_stdout)]
    fn slice(sheet: &Path, output_dir: &Path) -> Result<()> {
        let paths = slice_sheet(sheet, output_dir, SHEET_ROWS, SHEET_COLS)?;

        for path in &paths {
            println!("Saved: {}", path.display());
        }
        println!("Image splitting completed.");
        Ok(())
    }
}
