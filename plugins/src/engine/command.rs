//! 通过外部 ParZu 命令行解析：每次调用启动一个子进程，文本写入 stdin，结果读自 stdout

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parzu_core::api::{
    CommandEngineConfig, EngineError, InputFormat, OutputFormat, ParseEngine, ParseOutput,
    RenderStrategy,
};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

const STDERR_TAIL_CHARS: usize = 2000;

pub struct CommandEngine {
    cfg: CommandEngineConfig,
}

impl CommandEngine {
    pub fn new(cfg: CommandEngineConfig) -> anyhow::Result<Self> {
        if cfg.program.trim().is_empty() {
            anyhow::bail!("engine program must not be empty");
        }
        Ok(Self { cfg })
    }

    fn timeout(&self) -> Option<Duration> {
        (self.cfg.timeout_ms > 0).then(|| Duration::from_millis(self.cfg.timeout_ms))
    }

    fn command(&self, input: InputFormat, output: OutputFormat) -> Command {
        let mut cmd = Command::new(&self.cfg.program);
        cmd.args(&self.cfg.args)
            .arg("-i")
            .arg(input.as_str())
            .arg("-o")
            .arg(output.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = self.cfg.working_dir.as_deref().filter(|d| !d.is_empty()) {
            cmd.current_dir(dir);
        }
        cmd
    }

    async fn run(
        &self,
        text: &str,
        input: InputFormat,
        output: OutputFormat,
    ) -> Result<String, EngineError> {
        let mut child = self.command(input, output).spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                EngineError::Unavailable(format!("{}: {e}", self.cfg.program))
            }
            _ => EngineError::Io(e),
        })?;

        // stdin 单独写入，避免输出填满管道时互相阻塞
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| EngineError::Output("child stdin not captured".into()))?;
        let payload = text.as_bytes().to_vec();
        let writer = tokio::spawn(async move {
            if let Err(e) = stdin.write_all(&payload).await {
                tracing::debug!(error = %e, "parser closed stdin early");
            }
        });

        let waited = child.wait_with_output();
        let out = match self.timeout() {
            Some(limit) => tokio::time::timeout(limit, waited)
                .await
                .map_err(|_| EngineError::Timeout(limit))??,
            None => waited.await?,
        };
        let _ = writer.await;

        if !out.status.success() {
            return Err(EngineError::Failed {
                code: out.status.code(),
                stderr: stderr_tail(&out.stderr),
            });
        }

        String::from_utf8(out.stdout)
            .map_err(|e| EngineError::Output(format!("stdout is not valid UTF-8: {e}")))
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let s = String::from_utf8_lossy(stderr);
    let s = s.trim_end();
    let count = s.chars().count();
    if count <= STDERR_TAIL_CHARS {
        return s.to_string();
    }
    s.chars().skip(count - STDERR_TAIL_CHARS).collect()
}

/// 把命令行输出整理成渲染策略需要的形状
fn shape_output(format: OutputFormat, stdout: String) -> ParseOutput {
    match format.strategy() {
        RenderStrategy::LineJoined => {
            ParseOutput::Lines(stdout.lines().map(str::to_string).collect())
        }
        RenderStrategy::Passthrough => ParseOutput::Raw(stdout),
        RenderStrategy::ImageDocument => ParseOutput::Documents(vec![stdout]),
    }
}

#[async_trait]
impl ParseEngine for CommandEngine {
    fn name(&self) -> &str {
        "command"
    }

    async fn parse(
        &self,
        text: &str,
        input: InputFormat,
        output: OutputFormat,
    ) -> Result<ParseOutput, EngineError> {
        if text.contains('\0') {
            return Err(EngineError::InvalidInput("text contains NUL bytes".into()));
        }

        let start = Instant::now();
        let stdout = self.run(text, input, output).await?;
        tracing::debug!(
            program = %self.cfg.program,
            format = %output,
            bytes = stdout.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "parser process finished"
        );
        Ok(shape_output(output, stdout))
    }
}
