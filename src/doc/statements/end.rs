/*!
# `END`

## Purpose
Stop running the program and return to the prompt.

## Remarks
Variables are left intact for inspection.
`END` at the end of a program is optional.
Typed at the prompt, `END` does nothing.

## Example
```text
10 PRINT 1
20 END
30 PRINT 2
RUN
1
```

*/
