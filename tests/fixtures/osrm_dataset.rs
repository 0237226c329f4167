//! Prepares an OSRM MLD extract for the container-backed tests.
//!
//! Downloads the Geofabrik PBF once and runs extract/partition/customize in
//! the `osrm/osrm-backend` image. Every step is skipped when its output is
//! already on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const OSRM_IMAGE: &str = "osrm/osrm-backend";

#[derive(Debug)]
pub enum PrepError {
    Io(io::Error),
    Http(reqwest::Error),
    Docker(String),
}

impl From<io::Error> for PrepError {
    fn from(err: io::Error) -> Self {
        PrepError::Io(err)
    }
}

impl From<reqwest::Error> for PrepError {
    fn from(err: reqwest::Error) -> Self {
        PrepError::Http(err)
    }
}

#[derive(Debug, Clone)]
pub struct PreparedExtract {
    /// Directory mounted at `/data` in the container.
    pub data_dir: PathBuf,
    /// File name of the `.osrm` base inside `data_dir`.
    pub osrm_file: String,
}

impl PreparedExtract {
    /// Modification time of the partition, used to key reusable containers.
    pub fn stamp(&self) -> u64 {
        fs::metadata(self.data_dir.join(format!("{}.partition", self.osrm_file)))
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|time| time.duration_since(std::time::SystemTime::UNIX_EPOCH).ok())
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }
}

/// `region` is a Geofabrik path such as `north-america/us/nevada`.
pub fn prepare_extract(
    region: &str,
    data_root: impl AsRef<Path>,
) -> Result<PreparedExtract, PrepError> {
    let name = region.rsplit('/').next().unwrap_or("region");
    let data_dir = std::env::current_dir()?.join(data_root.as_ref()).join(name);
    fs::create_dir_all(&data_dir)?;

    let pbf_file = format!("{}-latest.osm.pbf", name);
    let osrm_file = format!("{}-latest.osrm", name);

    let pbf_path = data_dir.join(&pbf_file);
    if !pbf_path.exists() {
        let url = format!("https://download.geofabrik.de/{}-latest.osm.pbf", region);
        let bytes = reqwest::blocking::get(url)?.error_for_status()?.bytes()?;
        let partial = pbf_path.with_extension("part");
        fs::write(&partial, &bytes)?;
        fs::rename(partial, &pbf_path)?;
    }

    let osrm_in_container = format!("/data/{}", osrm_file);
    if !data_dir.join(&osrm_file).exists() {
        docker(&data_dir, &["osrm-extract", "-p", "/opt/car.lua", &format!("/data/{}", pbf_file)])?;
    }

    let mld_outputs = ["partition", "mldgr", "cells"];
    let mld_ready = mld_outputs
        .iter()
        .all(|ext| data_dir.join(format!("{}.{}", osrm_file, ext)).exists());
    if !mld_ready {
        docker(&data_dir, &["osrm-partition", &osrm_in_container])?;
        docker(&data_dir, &["osrm-customize", &osrm_in_container])?;
    }

    Ok(PreparedExtract { data_dir, osrm_file })
}

fn docker(data_dir: &Path, args: &[&str]) -> Result<(), PrepError> {
    let status = Command::new("docker")
        .args(["run", "--rm", "-t", "-v"])
        .arg(format!("{}:/data", data_dir.display()))
        .arg(OSRM_IMAGE)
        .args(args)
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(PrepError::Docker(format!("{} exited with {}", args[0], status)))
    }
}
