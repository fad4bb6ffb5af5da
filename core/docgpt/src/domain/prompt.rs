//! プロンプトテンプレート
//!
//! few-shot 1例とソースコードを `<script>` タグで囲んだ補完用プロンプト。
//! `</script>` は生成の停止シーケンスとしても使う。

/// コード開始タグ
pub const S_TAG: &str = "<script>";

/// コード終了タグ（補完の停止シーケンス）
pub const ENDS_TAG: &str = "</script>";

/// ソースコードからプロンプト全文を組み立てる
pub fn build_prompt(source_code: &str) -> String {
    format!(
        r#"
Add comments and one-liner docstrings to the following Python script to help explain
what each line of code is doing and how it contributes to the overall function of the program.

{s}
def permute_batch(z):
    assert z.dim() == 2
    B, _ = z.size()

    perm_idx = torch.randperm(B)
    permuted_z = z[perm_idx, :]

    return permuted_z, perm_idx
{e}

The updated script is:
{s}
def permute_batch(z):
    """Permute the samples in the given batch across the first dimension."""
    # Assert dimension is 2
    assert z.dim() == 2

    # Get shape of tensor
    B, _ = z.size()

    # Randomly permute z
    perm_idx = torch.randperm(B)
    permuted_z = z[perm_idx, :]

    # return the permuted tensor and the permutation index
    return permuted_z, perm_idx
{e}

{s}
{code}
{e}

The updated script is:
{s}

"#,
        s = S_TAG,
        e = ENDS_TAG,
        code = source_code
    )
}
