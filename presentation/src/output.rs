use std::io::Write;

pub const ABORT_MESSAGE: &str =
    "Não foi possível iniciar o chat. Verifique os erros de inicialização.";

pub fn present_answer<W: Write>(out: &mut W, question: &str, answer: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "PERGUNTA: {}", question)?;
    writeln!(out, "RESPOSTA: {}", answer)?;
    out.flush()
}

pub fn present_abort<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", ABORT_MESSAGE)?;
    out.flush()
}
