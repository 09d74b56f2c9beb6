use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::page_order::{check_page_bounds, invert_selection, parse_selector, SortPreset};
use crate::pdf::PdfDocument;

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfSelectRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Page selector (e.g. '1-3,5,2n' or 'all')")]
    pub pages: String,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfSortRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Sort preset name, e.g. 'BOOKLET_SORT' (see pdf_sort_presets), or 'CUSTOM_PAGE_ORDER'")]
    pub preset: String,
    #[schemars(description = "Page selector, required with CUSTOM_PAGE_ORDER")]
    #[serde(default)]
    pub pages: Option<String>,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfRemoveRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Page selector for the pages to drop (e.g. '3,7,9')")]
    pub pages: String,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Clone)]
pub struct PageServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PageServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PageServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PageServer {
    #[tool(description = "Get the page count of a PDF")]
    fn pdf_page_count(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        match PdfDocument::open(&path) {
            Ok(doc) => {
                let result = PageCountResult {
                    path,
                    page_count: doc.page_count(),
                };
                serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
            }
            Err(e) => format!("Error: {}", e),
        }
    }

    #[tool(description = "List the available sort preset names for pdf_sort")]
    fn pdf_sort_presets(&self) -> String {
        let names: Vec<&str> = SortPreset::ALL.iter().map(|preset| preset.name()).collect();
        serde_json::to_string_pretty(&names).unwrap_or_else(|e| format!("Error: {}", e))
    }

    #[tool(description = "Copy the pages matched by a selector into a new PDF, preserving selector order and duplicates. Selector syntax: 'all', ranges '1-5', single pages, linear terms '2n-1'.")]
    fn pdf_select(&self, Parameters(req): Parameters<PdfSelectRequest>) -> String {
        let doc = match PdfDocument::open(&req.path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };
        let total_pages = doc.page_count();

        let page_list = match parse_selector(&req.pages, total_pages) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };
        if page_list.is_empty() {
            return format!("Error: Selector {:?} matches no pages", req.pages);
        }
        if let Err(e) = check_page_bounds(&page_list, total_pages) {
            return format!("Error: {}", e);
        }

        write_pages(&doc, &page_list, req.output)
    }

    #[tool(description = "Reorder a PDF with a named sort preset (reverse, duplex, booklet, odd/even split, remove first/last), or with CUSTOM_PAGE_ORDER and a page selector")]
    fn pdf_sort(&self, Parameters(req): Parameters<PdfSortRequest>) -> String {
        let doc = match PdfDocument::open(&req.path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };
        let total_pages = doc.page_count();

        let normalized = req.preset.trim().to_ascii_uppercase().replace('-', "_");
        let page_list = if normalized == "CUSTOM_PAGE_ORDER" {
            let Some(pages) = req.pages.as_deref() else {
                return "Error: CUSTOM_PAGE_ORDER needs a page selector".to_string();
            };
            match parse_selector(pages, total_pages) {
                Ok(p) => p,
                Err(e) => return format!("Error: {}", e),
            }
        } else {
            match req.preset.parse::<SortPreset>() {
                Ok(preset) => preset.page_order(total_pages),
                Err(e) => return format!("Error: {}", e),
            }
        };

        if let Err(e) = check_page_bounds(&page_list, total_pages) {
            return format!("Error: {}", e);
        }

        write_pages(&doc, &page_list, req.output)
    }

    #[tool(description = "Remove the pages matched by a selector from a PDF, keeping the rest in order. Feed externally detected pages (e.g. blank ones) as '3,7,9'.")]
    fn pdf_remove(&self, Parameters(req): Parameters<PdfRemoveRequest>) -> String {
        let doc = match PdfDocument::open(&req.path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };
        let total_pages = doc.page_count();

        let pages_to_remove = match parse_selector(&req.pages, total_pages) {
            Ok(p) => p,
            Err(e) => return format!("Error: {}", e),
        };
        let page_list = invert_selection(&pages_to_remove, total_pages);

        write_pages(&doc, &page_list, req.output)
    }
}

fn write_pages(doc: &PdfDocument, page_list: &[u32], output: String) -> String {
    let mut new_doc = match doc.copy_pages(page_list) {
        Ok(d) => d,
        Err(e) => return format!("Error: {}", e),
    };

    if let Err(e) = PdfDocument::save(&mut new_doc, &output) {
        return format!("Error: {}", e);
    }

    let result = WriteResult {
        output_path: output,
        page_count: page_list.len() as u32,
    };
    serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PageCountResult {
    pub path: String,
    pub page_count: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WriteResult {
    pub output_path: String,
    pub page_count: u32,
}

impl ServerHandler for PageServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF page selection and reordering tools. Use pdf_page_count to size a document, \
                 pdf_select to pull pages out by selector, pdf_sort to reorder with a preset \
                 (pdf_sort_presets lists the names), and pdf_remove to drop pages."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PageServer::new();

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
