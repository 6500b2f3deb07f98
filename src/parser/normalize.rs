/// 将多行 curl 命令折叠成单行
///
/// - `\` 紧跟换行（shell 续行）替换为一个空格
/// - 其余的换行替换为一个空格
///
/// 引号、转义和变量引用保持原样。
pub fn normalize(command: &str) -> String {
    command
        .replace("\\\r\n", " ")
        .replace("\\\n", " ")
        .replace("\r\n", " ")
        .replace('\n', " ")
}
