use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use parzu_core::api::{EngineError, InputFormat, OutputFormat, ParseEngine, ParseOutput};

/// 记录调用次数与参数的假引擎
pub struct MockEngine {
    pub calls: AtomicUsize,
    pub last_call: Mutex<Option<(String, InputFormat, OutputFormat)>>,
    respond: Box<dyn Fn(&str, OutputFormat) -> Result<ParseOutput, EngineError> + Send + Sync>,
}

impl MockEngine {
    pub fn new(
        respond: impl Fn(&str, OutputFormat) -> Result<ParseOutput, EngineError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
            respond: Box::new(respond),
        }
    }

    /// 按格式返回固定结果
    pub fn canned() -> Self {
        Self::new(|text, format| Ok(canned_output(text, format)))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn canned_output(text: &str, format: OutputFormat) -> ParseOutput {
    match format {
        OutputFormat::Graphical => {
            ParseOutput::Documents(vec![format!("<svg><text>{text}</text></svg>")])
        }
        OutputFormat::Raw | OutputFormat::Preprocessed => {
            ParseOutput::Raw(format!("{text}\n\n\t raw \n"))
        }
        _ => ParseOutput::Lines(
            text.split_whitespace()
                .enumerate()
                .map(|(i, tok)| format!("{}\t{}\t{}", i + 1, tok, format))
                .collect(),
        ),
    }
}

#[async_trait]
impl ParseEngine for MockEngine {
    fn name(&self) -> &str {
        "mock"
    }

    async fn parse(
        &self,
        text: &str,
        input: InputFormat,
        output: OutputFormat,
    ) -> Result<ParseOutput, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((text.to_string(), input, output));
        (self.respond)(text, output)
    }
}
