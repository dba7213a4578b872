// Licensed under the Apache License, Version 2.0 (the "License"); you may
// not use this file except in compliance with the License. You may obtain
// a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the
// License for the specific language governing permissions and limitations
// under the License.

//! Reader for graphs stored as coordinate Matrix Market files.
//!
//! ```text
//! %%MatrixMarket matrix coordinate pattern symmetric
//! % comments
//! 62 62 159
//! 9 4
//! 10 6
//! ...
//! ```
//!
//! Every entry `i j` becomes the undirected edge `{i, j}`. A trailing value
//! column, as found in `real` and `integer` matrices, is accepted and ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::{debug, warn};

use crate::error::{GraphError, ParseError};
use crate::graph::Graph;
use crate::Vertex;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A parsed Matrix Market description, before graph validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatrixMarket {
    pub vertex_count: usize,
    /// Entry count announced by the size line.
    pub declared_entries: usize,
    /// Entries in file order, as written.
    pub edges: Vec<(u64, u64)>,
}

impl TryFrom<MatrixMarket> for Graph {
    type Error = GraphError;

    fn try_from(matrix: MatrixMarket) -> Result<Self, Self::Error> {
        let vertex_count = matrix.vertex_count;
        let edges = matrix
            .edges
            .into_iter()
            .map(|(u, v)| Ok((narrow(u, vertex_count)?, narrow(v, vertex_count)?)))
            .collect::<Result<Vec<_>, GraphError>>()?;
        Graph::from_edges(vertex_count, edges)
    }
}

fn narrow(vertex: u64, vertex_count: usize) -> Result<Vertex, GraphError> {
    Vertex::try_from(vertex).map_err(|_| GraphError::VertexOutOfRange {
        vertex,
        vertex_count,
    })
}

/// Parse Matrix Market text from `reader`.
pub fn parse_matrix_market<R: BufRead>(reader: R) -> Result<MatrixMarket, ParseError> {
    let mut header: Option<(usize, usize)> = None;
    let mut edges = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let content = line.trim();
        if content.is_empty() || content.starts_with('%') {
            continue;
        }
        match header {
            None => header = Some(parse_size_line(content, line_number)?),
            Some(_) => edges.push(parse_entry(content, line_number)?),
        }
    }

    let (vertex_count, declared_entries) = header.ok_or(ParseError::MissingHeader)?;
    if declared_entries != edges.len() {
        warn!(
            declared = declared_entries,
            read = edges.len(),
            "entry count differs from the size line"
        );
    }
    debug!(vertices = vertex_count, entries = edges.len(), "parsed matrix market input");
    Ok(MatrixMarket {
        vertex_count,
        declared_entries,
        edges,
    })
}

fn parse_size_line(content: &str, line: usize) -> Result<(usize, usize), ParseError> {
    let malformed = || ParseError::MalformedHeader {
        line,
        content: content.to_string(),
    };
    let fields = content
        .split_whitespace()
        .map(|field| field.parse::<usize>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;
    let &[rows, cols, entries] = fields.as_slice() else {
        return Err(malformed());
    };
    if rows != cols {
        return Err(ParseError::NotSquare { rows, cols });
    }
    Ok((rows, entries))
}

fn parse_entry(content: &str, line: usize) -> Result<(u64, u64), ParseError> {
    let malformed = || ParseError::MalformedEntry {
        line,
        content: content.to_string(),
    };
    let mut fields = content.split_whitespace();
    let mut endpoint = || {
        fields
            .next()
            .and_then(|field| field.parse::<u64>().ok())
            .ok_or_else(malformed)
    };
    let (u, v) = (endpoint()?, endpoint()?);
    if let Some(value) = fields.next() {
        if value.parse::<f64>().is_err() {
            return Err(malformed());
        }
    }
    if fields.next().is_some() {
        return Err(malformed());
    }
    Ok((u, v))
}

/// Read a Matrix Market file, decompressing it first if it is gzipped.
pub fn read_matrix_market<P: AsRef<Path>>(path: P) -> Result<MatrixMarket, ParseError> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let compressed = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
    debug!(path = %path.display(), compressed, "reading matrix market file");
    if compressed {
        parse_matrix_market(BufReader::new(GzDecoder::new(reader)))
    } else {
        parse_matrix_market(reader)
    }
}

/// Parse an in-memory buffer, plain or gzipped.
pub fn matrix_market_from_bytes(bytes: &[u8]) -> Result<MatrixMarket, ParseError> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut text = String::new();
        GzDecoder::new(bytes).read_to_string(&mut text)?;
        parse_matrix_market(text.as_bytes())
    } else {
        parse_matrix_market(bytes)
    }
}

/// Read a Matrix Market file and build the validated [`Graph`].
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph, ParseError> {
    let matrix = read_matrix_market(path)?;
    Ok(Graph::try_from(matrix)?)
}
