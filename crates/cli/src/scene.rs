//! Plain-text scene loader (spec.md §6): one record per line,
//! `x1 y1 x2 y2 vx vy color`. `#`-comment and blank lines are skipped.

use anyhow::{bail, Context, Result};
use linesim::Vec2;

pub struct Record {
    pub p1: Vec2,
    pub p2: Vec2,
    pub velocity: Vec2,
    pub color: String,
}

pub fn load(path: &str) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading scene file {path}"))?;
    parse(&text)
}

fn parse(text: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 7 {
            bail!("line {}: expected 7 fields (x1 y1 x2 y2 vx vy color), got {}", line_no + 1, fields.len());
        }
        let mut nums = [0.0f64; 6];
        for (i, n) in nums.iter_mut().enumerate() {
            *n = fields[i].parse().with_context(|| format!("line {}: invalid number {:?}", line_no + 1, fields[i]))?;
        }
        records.push(Record {
            p1: Vec2::new(nums[0], nums[1]),
            p2: Vec2::new(nums[2], nums[3]),
            velocity: Vec2::new(nums[4], nums[5]),
            color: fields[6].to_string(),
        });
    }
    Ok(records)
}
