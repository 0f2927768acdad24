//! Ore-field generation: a box of host rock threaded with noise-driven veins.

use std::error::Error;
use std::fs;
use std::path::Path;

use excavar_blocks::Block;
use excavar_geom::Cell;
use fastnoise_lite::{FastNoiseLite, NoiseType};
use serde::Deserialize;

use crate::world::{VoxelWorld, WorldError};

#[derive(Clone, Debug, Deserialize)]
pub struct OreFieldConfig {
    #[serde(default = "default_host")]
    pub host: String,
    /// Inclusive lower corner of the generated box.
    #[serde(default = "default_min")]
    pub min: [i32; 3],
    #[serde(default = "default_max")]
    pub max: [i32; 3],
    #[serde(default = "default_veins")]
    pub veins: Vec<VeinDef>,
}

fn default_host() -> String {
    "stone".into()
}
fn default_min() -> [i32; 3] {
    [-16, -16, -16]
}
fn default_max() -> [i32; 3] {
    [15, 15, 15]
}
fn default_veins() -> Vec<VeinDef> {
    vec![
        VeinDef {
            block: "coal_ore".into(),
            threshold: 0.45,
            fractal: Fractal::default(),
        },
        VeinDef {
            block: "iron_ore".into(),
            threshold: 0.6,
            fractal: Fractal {
                scale: 10.0,
                ..Fractal::default()
            },
        },
    ]
}

impl Default for OreFieldConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            min: default_min(),
            max: default_max(),
            veins: default_veins(),
        }
    }
}

/// One ore kind. A cell becomes `block` where the vein noise exceeds `threshold`.
#[derive(Clone, Debug, Deserialize)]
pub struct VeinDef {
    pub block: String,
    #[serde(default = "d_threshold")]
    pub threshold: f32,
    #[serde(default)]
    pub fractal: Fractal,
}
fn d_threshold() -> f32 {
    0.5
}

#[derive(Clone, Debug, Deserialize)]
pub struct Fractal {
    #[serde(default = "d_oct")]
    pub octaves: i32,
    #[serde(default = "d_pers")]
    pub persistence: f32,
    #[serde(default = "d_lac")]
    pub lacunarity: f32,
    #[serde(default = "d_scale")]
    pub scale: f32,
}
fn d_oct() -> i32 {
    3
}
fn d_pers() -> f32 {
    0.5
}
fn d_lac() -> f32 {
    2.0
}
fn d_scale() -> f32 {
    14.0
}
impl Default for Fractal {
    fn default() -> Self {
        Self {
            octaves: d_oct(),
            persistence: d_pers(),
            lacunarity: d_lac(),
            scale: d_scale(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<OreFieldConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: OreFieldConfig = toml::from_str(&s)?;
    Ok(cfg)
}

struct Vein {
    block: Block,
    threshold: f32,
    fractal: Fractal,
    noise: FastNoiseLite,
}

/// Seeded generator. Identical seed and config produce identical worlds.
pub struct OreField {
    seed: i32,
    config: OreFieldConfig,
}

impl OreField {
    pub fn new(seed: i32, config: OreFieldConfig) -> Self {
        Self { seed, config }
    }

    pub fn config(&self) -> &OreFieldConfig {
        &self.config
    }

    /// Fills the configured box in `world` and returns the number of vein cells
    /// placed per vein, in config order. Later veins win where two overlap.
    pub fn generate(&self, world: &mut VoxelWorld) -> Result<Vec<(String, usize)>, WorldError> {
        let host = world.block_by_name(&self.config.host)?;
        let mut veins = Vec::with_capacity(self.config.veins.len());
        for (i, def) in self.config.veins.iter().enumerate() {
            let block = world.block_by_name(&def.block)?;
            let mut noise = FastNoiseLite::with_seed(self.seed ^ (i as i32 + 1).wrapping_mul(0x51F1_5E3D));
            noise.set_noise_type(Some(NoiseType::OpenSimplex2));
            noise.set_frequency(Some(1.0));
            veins.push(Vein {
                block,
                threshold: def.threshold,
                fractal: def.fractal.clone(),
                noise,
            });
        }

        let min = Cell::from(self.config.min);
        let max = Cell::from(self.config.max);
        world.fill_box(min, max, host);

        let mut placed = vec![0usize; veins.len()];
        for z in min.z..=max.z {
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    let c = Cell::new(x, y, z);
                    let hit = veins.iter().enumerate().rev().find(|(_, v)| {
                        fractal3(&v.noise, x as f32, y as f32, z as f32, &v.fractal) > v.threshold
                    });
                    if let Some((i, v)) = hit {
                        world.set(c, v.block);
                        placed[i] += 1;
                    }
                }
            }
        }
        log::debug!(
            target: "excavar::world",
            "ore field seed {} over {}..{}: {:?}",
            self.seed,
            min,
            max,
            placed
        );
        Ok(self
            .config
            .veins
            .iter()
            .map(|d| d.block.clone())
            .zip(placed)
            .collect())
    }
}

fn fractal3(noise: &FastNoiseLite, x: f32, y: f32, z: f32, fractal: &Fractal) -> f32 {
    let mut amp = 1.0_f32;
    let mut freq = 1.0_f32 / fractal.scale.max(0.0001);
    let mut sum = 0.0_f32;
    let mut max_amp = 0.0_f32;
    for _ in 0..fractal.octaves.max(1) {
        sum += noise.get_noise_3d(x * freq, y * freq, z * freq) * amp;
        max_amp += amp;
        amp *= fractal.persistence;
        freq *= fractal.lacunarity;
    }
    if max_amp > 0.0 { sum / max_amp } else { sum }
}
