use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::algorithm::AllPairsShortestPath;
use crate::graph::{AttributedGraph, MutableGraph, DEFAULT_WEIGHT_KEY};
use crate::Error;
use libc::c_int;
use std::collections::HashMap;

pub const FAPSP_OK: c_int = 0;
pub const FAPSP_INVALID_WEIGHT: c_int = 1;
pub const FAPSP_NEGATIVE_CYCLE: c_int = 2;
pub const FAPSP_NULL_POINTER: c_int = -1;

/// Marks an absent predecessor in `FfiResult::predecessors`
///
/// Predecessors are positions into `vertices`, so no real entry can collide
/// with this value.
pub const FAPSP_NO_PREDECESSOR: usize = usize::MAX;

#[repr(C)]
pub struct FfiGraph {
    graph: AttributedGraph<u64, f64>,
}

#[no_mangle]
pub extern "C" fn fapsp_graph_new(directed: bool) -> *mut FfiGraph {
    let graph = if directed {
        AttributedGraph::new_directed()
    } else {
        AttributedGraph::new_undirected()
    };
    Box::into_raw(Box::new(FfiGraph { graph }))
}

#[no_mangle]
pub extern "C" fn fapsp_graph_add_vertex(g: *mut FfiGraph, vertex: u64) -> bool {
    unsafe { &mut *g }.graph.add_vertex(vertex)
}

#[no_mangle]
pub extern "C" fn fapsp_graph_add_edge(g: *mut FfiGraph, from: u64, to: u64, weight: f64) {
    unsafe { &mut *g }.graph.add_edge(from, to, weight)
}

#[no_mangle]
pub extern "C" fn fapsp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Row-major all-pairs result; row and column `i` belong to `vertices[i]`
///
/// `predecessors[i * len + j]` is the position in `vertices` of the vertex
/// preceding `vertices[j]` on a shortest path from `vertices[i]`.
#[repr(C)]
pub struct FfiResult {
    vertices: *mut u64,
    distances: *mut f64,
    predecessors: *mut usize,
    len: usize,
}

#[no_mangle]
pub extern "C" fn fapsp_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            let len = (*res).len;
            if !(*res).vertices.is_null() {
                drop(Vec::from_raw_parts((*res).vertices, len, len));
            }
            if !(*res).distances.is_null() {
                drop(Vec::from_raw_parts((*res).distances, len * len, len * len));
            }
            if !(*res).predecessors.is_null() {
                drop(Vec::from_raw_parts((*res).predecessors, len * len, len * len));
            }
            drop(Box::from_raw(res));
        }
    }
}

fn into_raw_parts<T>(values: Vec<T>) -> *mut T {
    let mut values = values.into_boxed_slice();
    let ptr = values.as_mut_ptr();
    std::mem::forget(values);
    ptr
}

/// Run Floyd-Warshall and store the result in `*out`
///
/// Returns `FAPSP_OK` on success; on failure `*out` is left untouched.
#[no_mangle]
pub extern "C" fn fapsp_compute_all_pairs(g: *const FfiGraph, out: *mut *mut FfiResult) -> c_int {
    if g.is_null() || out.is_null() {
        return FAPSP_NULL_POINTER;
    }
    let graph = unsafe { &(*g).graph };
    let alg = FloydWarshall::new();
    match alg.compute_distances_and_predecessors(graph, DEFAULT_WEIGHT_KEY) {
        Ok((predecessors, distances)) => {
            let vertices = distances.vertices().to_vec();
            let len = vertices.len();
            let positions: HashMap<u64, usize> =
                vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
            let mut dist_vec = Vec::with_capacity(len * len);
            let mut pred_vec = Vec::with_capacity(len * len);
            for from in &vertices {
                for to in &vertices {
                    dist_vec.push(distances.get(from, to));
                    pred_vec.push(
                        predecessors
                            .get(from, to)
                            .and_then(|p| positions.get(p).copied())
                            .unwrap_or(FAPSP_NO_PREDECESSOR),
                    );
                }
            }
            let result = FfiResult {
                vertices: into_raw_parts(vertices),
                distances: into_raw_parts(dist_vec),
                predecessors: into_raw_parts(pred_vec),
                len,
            };
            unsafe {
                *out = Box::into_raw(Box::new(result));
            }
            FAPSP_OK
        }
        Err(Error::NegativeCycleDetected { .. }) => FAPSP_NEGATIVE_CYCLE,
        Err(_) => FAPSP_INVALID_WEIGHT,
    }
}
