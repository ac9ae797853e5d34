/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
If `<line number>` doesn't exist an `UNDEFINED LINE` error stops the program.
Only valid inside a running program.

## Example
```text
10 GOTO 30
20 PRINT 1
30 PRINT 2
RUN
2
```

*/
