use serde::Deserialize;

/// Top-level Image Analysis 4.0 response. Only the read feature is requested,
/// so everything except `read_result` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub model_version: Option<String>,
    pub metadata: Option<ImageMetadata>,
    pub read_result: Option<ReadResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadResult {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default)]
    pub lines: Vec<Line>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub text: String,
    #[serde(default)]
    pub bounding_polygon: Vec<PolygonPoint>,
    #[serde(default)]
    pub words: Vec<Word>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub text: String,
    #[serde(default)]
    pub bounding_polygon: Vec<PolygonPoint>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PolygonPoint {
    pub x: f32,
    pub y: f32,
}

impl ReadResult {
    /// Lines of the first block. The service can return several blocks for
    /// multi-region documents; everything after `blocks[0]` is ignored here,
    /// so such documents are under-reported.
    pub fn first_block_lines(&self) -> &[Line] {
        self.blocks
            .first()
            .map(|block| block.lines.as_slice())
            .unwrap_or(&[])
    }
}
