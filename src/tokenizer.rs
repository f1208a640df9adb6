use std::sync::LazyLock;
use tiktoken_rs::{CoreBPE, o200k_base};

static TOK: LazyLock<Option<CoreBPE>> = LazyLock::new(|| match o200k_base() {
    Ok(bpe) => Some(bpe),
    Err(e) => {
        tracing::warn!("Tokenizer unavailable, token count disabled: {e}");
        None
    }
});

/// Count tokens in a string using the shared o200k tokenizer.
#[inline]
pub fn count(text: &str) -> Option<usize> {
    TOK.as_ref()
        .map(|bpe| bpe.encode_with_special_tokens(text).len())
}
