use crate::config::{DatasetSettings, DownloadSettings};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("download request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("bad status {status} for {url}")]
    BadStatus {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Sample annotations matching the downloaded images, one file per image.
const SAMPLE_LABELS: [(&str, &[&str]); 5] = [
    ("img001.txt", &["0 150 100 200 350", "1 400 300 100 120"]),
    ("img002.txt", &["0 200 150 180 300", "2 500 200 150 100"]),
    (
        "img003.txt",
        &["0 100 80 150 280", "0 350 120 160 290", "1 550 350 80 90"],
    ),
    ("img004.txt", &["3 250 200 200 180", "0 100 150 140 250"]),
    ("img005.txt", &["4 300 250 180 150", "0 50 100 130 280"]),
];

/// Build the fixed dataset layout and populate it with sample images and
/// labels. Any failure here aborts the run.
pub async fn create_dataset(
    dataset: &DatasetSettings,
    download: &DownloadSettings,
) -> Result<(), DatasetError> {
    create_layout(dataset)?;
    download_images(download, &dataset.images_dir()).await?;
    write_sample_labels(&dataset.labels_dir())?;

    Ok(())
}

pub fn create_layout(dataset: &DatasetSettings) -> Result<(), DatasetError> {
    for dir in [
        dataset.images_dir(),
        dataset.labels_dir(),
        dataset.visualized_dir(),
    ] {
        std::fs::create_dir_all(&dir)?;
        tracing::info!("created directory {}", dir.display());
    }

    Ok(())
}

async fn download_images(
    download: &DownloadSettings,
    images_dir: &Path,
) -> Result<(), DatasetError> {
    let client = reqwest::Client::new();

    for i in 1..=download.image_count {
        let url = format!("{}?random={}", download.base_url, i);
        let filename = format!("img{:03}.jpg", i);

        tracing::info!("downloading {}", filename);
        let response = client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(DatasetError::BadStatus {
                status: response.status(),
                url,
            });
        }

        let bytes = response.bytes().await?;
        std::fs::write(images_dir.join(&filename), &bytes)?;
    }

    Ok(())
}

fn write_sample_labels(labels_dir: &Path) -> Result<(), DatasetError> {
    for (filename, lines) in SAMPLE_LABELS {
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        std::fs::write(labels_dir.join(filename), content)?;
        tracing::info!("wrote {} ({} boxes)", filename, lines.len());
    }

    Ok(())
}
